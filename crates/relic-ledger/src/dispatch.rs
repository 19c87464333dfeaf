//! Dispatcher - routes named operations to the order service

use relic_core::{OrderError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::core::OrderService;

/// Payload returned by the `init` operation
pub const INIT_SUCCESS: &[u8] = b"Success Init";

/// Operations a caller can invoke by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `init`: readiness handshake, touches nothing
    Init,
    /// `addneworder`: record a new order (24 args)
    AddNewOrder,
    /// `getorder`: fetch one order by `orderID` (1 arg)
    GetOrder,
    /// `getorderbyrelicid`: fetch all orders for a `relicID` (1 arg)
    GetOrderByRelicId,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::AddNewOrder => "addneworder",
            Operation::GetOrder => "getorder",
            Operation::GetOrderByRelicId => "getorderbyrelicid",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "init" => Ok(Operation::Init),
            "addneworder" => Ok(Operation::AddNewOrder),
            "getorder" => Ok(Operation::GetOrder),
            "getorderbyrelicid" => Ok(Operation::GetOrderByRelicId),
            other => Err(OrderError::UnknownOperation(other.to_string())),
        }
    }
}

/// Maps an operation name plus positional arguments onto [`OrderService`]
#[derive(Debug, Clone)]
pub struct Dispatcher {
    service: OrderService,
}

impl Dispatcher {
    pub fn new(service: OrderService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &OrderService {
        &self.service
    }

    /// Invoke `function` with `args`
    ///
    /// # Errors
    /// `UnknownOperation` for names without a route, otherwise whatever the
    /// routed operation returns.
    pub async fn invoke(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        let operation = function.parse::<Operation>().inspect_err(|_| {
            warn!(function = %function, "No route for function");
        })?;

        debug!(operation = %operation, args = args.len(), "Dispatching");

        match operation {
            Operation::Init => Ok(INIT_SUCCESS.to_vec()),
            Operation::AddNewOrder => self.service.write(args).await,
            Operation::GetOrder => self.service.read_by_key(args).await,
            Operation::GetOrderByRelicId => self.service.read_by_attribute(args).await,
        }
    }
}
