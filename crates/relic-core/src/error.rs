//! Error types for relic order handling

use thiserror::Error;

/// Result type alias using OrderError
pub type Result<T> = std::result::Result<T, OrderError>;

/// Errors that can occur while handling relic orders
///
/// Every variant is terminal for the call that produced it. Nothing is
/// retried and no partial state is left behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Wrong number of positional arguments
    #[error("the number of args is not {expected} (got {actual})")]
    Arity { expected: usize, actual: usize },

    /// An order with this ID is already stored
    #[error("relic has been existed: {0}")]
    DuplicateKey(String),

    /// Order could not be encoded
    #[error("relic order marshal is failed for {0}")]
    Serialization(String),

    /// The ledger rejected the write
    #[error("put state for relic order failed: {0}")]
    Persistence(String),

    /// The ledger failed to answer a key lookup
    #[error("getting relic order error: {0}")]
    Lookup(String),

    /// No order is stored under the requested ID
    #[error("relic order is not exist: {0}")]
    NotFound(String),

    /// The ledger failed to run a rich query
    #[error("failed to query by {field}: {reason}")]
    Query { field: String, reason: String },

    /// The dispatcher has no route for this function name
    #[error("function {0} is not exist")]
    UnknownOperation(String),
}

impl OrderError {
    /// Build an arity error
    pub fn arity(expected: usize, actual: usize) -> Self {
        OrderError::Arity { expected, actual }
    }

    /// Build a query error for the given field
    pub fn query(field: impl Into<String>, reason: impl ToString) -> Self {
        OrderError::Query {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::Arity { .. } => "ARITY",
            OrderError::DuplicateKey(_) => "DUPLICATE_KEY",
            OrderError::Serialization(_) => "SERIALIZATION",
            OrderError::Persistence(_) => "PERSISTENCE",
            OrderError::Lookup(_) => "LOOKUP",
            OrderError::NotFound(_) => "NOT_FOUND",
            OrderError::Query { .. } => "QUERY",
            OrderError::UnknownOperation(_) => "UNKNOWN_OPERATION",
        }
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(err: serde_json::Error) -> Self {
        OrderError::Serialization(err.to_string())
    }
}
