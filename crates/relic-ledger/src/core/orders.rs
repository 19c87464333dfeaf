//! Order service: the write path and both read paths
//!
//! Handlers are stateless. Each call validates its arguments, talks to the
//! ledger through [`LedgerGateway`] and either returns response bytes or a
//! terminal [`OrderError`]. Nothing is retried.

use relic_core::{assemble_results, Order, OrderError, Result, Selector, RELIC_ID_FIELD};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::storage::{LedgerError, LedgerGateway};

/// Payload returned by a successful write
pub const WRITE_SUCCESS: &[u8] = b"add relic order success";

/// Record-management logic over a ledger
#[derive(Debug, Clone)]
pub struct OrderService {
    ledger: Arc<dyn LedgerGateway>,
}

impl OrderService {
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// The ledger this service writes to
    pub fn ledger(&self) -> &Arc<dyn LedgerGateway> {
        &self.ledger
    }

    /// Record a new order from its 24 positional fields
    ///
    /// Either exactly one ledger entry is created or none is.
    ///
    /// # Errors
    /// - `Arity` if `args` does not hold 24 values (ledger untouched)
    /// - `DuplicateKey` if an order with the same `orderID` exists
    /// - `Lookup` if the existence check fails
    /// - `Serialization` if the order cannot be encoded
    /// - `Persistence` if the ledger rejects the write
    pub async fn write<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>> {
        let order = Order::from_args(args).inspect_err(|e| {
            warn!(error = %e, "Rejected order write");
        })?;
        let order_id = order.order_id.as_str();

        let existing = self.ledger.get_state(order_id).await.map_err(|e| {
            error!(order_id = %order_id, error = %e, "Existence check failed");
            OrderError::Lookup(e.to_string())
        })?;
        if existing.is_some() {
            warn!(order_id = %order_id, "Order already exists");
            return Err(OrderError::DuplicateKey(order_id.to_string()));
        }

        let document = order.to_bytes()?;

        match self.ledger.put_state_if_absent(order_id, document).await {
            Ok(()) => {}
            Err(LedgerError::AlreadyExists(_)) => {
                warn!(order_id = %order_id, "Order written concurrently");
                return Err(OrderError::DuplicateKey(order_id.to_string()));
            }
            Err(e) => {
                error!(order_id = %order_id, error = %e, "Failed to persist order");
                return Err(OrderError::Persistence(e.to_string()));
            }
        }

        info!(
            order_id = %order_id,
            relic_id = %order.relic_id,
            "Recorded relic order"
        );
        Ok(WRITE_SUCCESS.to_vec())
    }

    /// Fetch the stored document for one `orderID`
    ///
    /// Returns the bytes exactly as they were persisted.
    pub async fn read_by_key<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>> {
        let [order_id] = args else {
            return Err(OrderError::arity(1, args.len()));
        };
        let order_id = order_id.as_ref();

        let stored = self.ledger.get_state(order_id).await.map_err(|e| {
            error!(order_id = %order_id, error = %e, "Order lookup failed");
            OrderError::Lookup(e.to_string())
        })?;

        stored.ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    /// Fetch every order recorded for one `relicID`
    ///
    /// Returns `[{"Key": <orderID>, "Record": <document>}, ...]`; no matches
    /// yields `[]`.
    pub async fn read_by_attribute<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>> {
        let [relic_id] = args else {
            return Err(OrderError::arity(1, args.len()));
        };

        let selector = Selector::field_equals(RELIC_ID_FIELD, relic_id.as_ref());
        self.query(&selector).await
    }

    async fn query(&self, selector: &Selector) -> Result<Vec<u8>> {
        let query_failed = |e: LedgerError| {
            error!(selector = %selector, error = %e, "Rich query failed");
            OrderError::query(selector.field(), e)
        };

        let mut results = self
            .ledger
            .get_query_result(selector)
            .await
            .map_err(query_failed)?;

        let assembled = assemble_results(results.as_mut()).map_err(query_failed)?;

        info!(selector = %selector, bytes = assembled.len(), "Assembled query result");
        Ok(assembled)
    }
}
