//! Relic orders and their positional codec
//!
//! An order arrives as a fixed list of 24 positional string arguments and is
//! stored as a JSON object keyed by `orderID`. Values are kept verbatim: no
//! trimming, no type coercion.

use serde::{Deserialize, Serialize};

use crate::error::{OrderError, Result};

/// Number of positional arguments an order is built from
pub const ORDER_FIELD_COUNT: usize = 24;

/// Serialized name of the primary key field
pub const ORDER_ID_FIELD: &str = "orderID";

/// Serialized name of the artifact identifier field
pub const RELIC_ID_FIELD: &str = "relicID";

/// A single artifact custody/sale transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "orderID")]
    pub order_id: String,
    pub order_value: String,
    pub order_date: String,
    pub order_status: String,

    #[serde(rename = "provideID")]
    pub provide_id: String,
    #[serde(rename = "buyerID")]
    pub buyer_id: String,
    #[serde(rename = "sellerID")]
    pub seller_id: String,
    #[serde(rename = "ownerID")]
    pub owner_id: String,

    /// Artifact identifier; many orders may share one
    #[serde(rename = "relicID")]
    pub relic_id: String,
    pub gov_num: String,
    pub relic_name: String,
    pub relic_describe: String,
    #[serde(rename = "relicDataURL")]
    pub relic_data_url: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub input_date: String,

    pub judge_name: String,
    pub judge_num: String,
    #[serde(rename = "judgeOrgID")]
    pub judge_org_id: String,

    pub evaluation: String,
    pub evaluation_name: String,
    pub evaluation_num: String,

    pub new_value: String,
    pub new_value_date: String,

    pub relic_status: String,
}

impl Order {
    /// Serialized field names, in positional order
    pub const FIELD_NAMES: [&'static str; ORDER_FIELD_COUNT] = [
        "orderID",
        "orderValue",
        "orderDate",
        "orderStatus",
        "provideID",
        "buyerID",
        "sellerID",
        "ownerID",
        "relicID",
        "govNum",
        "relicName",
        "relicDescribe",
        "relicDataURL",
        "imageURL",
        "inputDate",
        "judgeName",
        "judgeNum",
        "judgeOrgID",
        "evaluation",
        "evaluationName",
        "evaluationNum",
        "newValue",
        "newValueDate",
        "relicStatus",
    ];

    /// Build an order from its 24 positional arguments
    ///
    /// Position 0 is `orderID`, position 23 is `relicStatus`; see
    /// [`Order::FIELD_NAMES`] for the full mapping.
    ///
    /// # Errors
    /// Returns `OrderError::Arity` if `args` does not hold exactly 24 values.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let [order_id, order_value, order_date, order_status, provide_id, buyer_id, seller_id, owner_id, relic_id, gov_num, relic_name, relic_describe, relic_data_url, image_url, input_date, judge_name, judge_num, judge_org_id, evaluation, evaluation_name, evaluation_num, new_value, new_value_date, relic_status] =
            args
        else {
            return Err(OrderError::arity(ORDER_FIELD_COUNT, args.len()));
        };

        let text = |s: &S| s.as_ref().to_owned();

        Ok(Self {
            order_id: text(order_id),
            order_value: text(order_value),
            order_date: text(order_date),
            order_status: text(order_status),
            provide_id: text(provide_id),
            buyer_id: text(buyer_id),
            seller_id: text(seller_id),
            owner_id: text(owner_id),
            relic_id: text(relic_id),
            gov_num: text(gov_num),
            relic_name: text(relic_name),
            relic_describe: text(relic_describe),
            relic_data_url: text(relic_data_url),
            image_url: text(image_url),
            input_date: text(input_date),
            judge_name: text(judge_name),
            judge_num: text(judge_num),
            judge_org_id: text(judge_org_id),
            evaluation: text(evaluation),
            evaluation_name: text(evaluation_name),
            evaluation_num: text(evaluation_num),
            new_value: text(new_value),
            new_value_date: text(new_value_date),
            relic_status: text(relic_status),
        })
    }

    /// The 24 field values in positional order (inverse of [`Order::from_args`])
    pub fn fields(&self) -> [&str; ORDER_FIELD_COUNT] {
        [
            &self.order_id,
            &self.order_value,
            &self.order_date,
            &self.order_status,
            &self.provide_id,
            &self.buyer_id,
            &self.seller_id,
            &self.owner_id,
            &self.relic_id,
            &self.gov_num,
            &self.relic_name,
            &self.relic_describe,
            &self.relic_data_url,
            &self.image_url,
            &self.input_date,
            &self.judge_name,
            &self.judge_num,
            &self.judge_org_id,
            &self.evaluation,
            &self.evaluation_name,
            &self.evaluation_num,
            &self.new_value,
            &self.new_value_date,
            &self.relic_status,
        ]
    }

    /// Encode the order as the JSON document stored in the ledger
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode an order from a stored JSON document
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
