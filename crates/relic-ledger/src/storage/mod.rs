//! Ledger abstraction for the order service
//!
//! The ledger is the only persistence backend of this service. This module
//! models its call contract (get, put, rich query) as a trait, with an
//! in-memory implementation (default) and a PostgreSQL implementation behind
//! the `postgres` feature.
//!
//! Durability, replication and commit ordering belong to the backend. The one
//! guarantee the service needs from it is [`LedgerGateway::put_state_if_absent`]:
//! an atomic insert that fails when the key is already taken.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemoryLedger;
#[cfg(feature = "postgres")]
pub use postgres::PostgresLedger;

use async_trait::async_trait;
use relic_core::{QueryRecord, Selector, StateQueryIterator};
use std::fmt::Debug;
use tracing::debug;

/// Error type for ledger operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum LedgerError {
    #[error("Key already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Cursor returned by [`LedgerGateway::get_query_result`]
pub type QueryIterator = Box<dyn StateQueryIterator<LedgerError>>;

/// Ledger backend trait
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait LedgerGateway: Send + Sync + Debug {
    /// Read the value stored under `key`, if any
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Store `value` under `key` only if the key is unused
    ///
    /// Fails with `LedgerError::AlreadyExists` when a value is already present.
    /// The check and the write are a single atomic step.
    async fn put_state_if_absent(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Run a rich query and return a cursor over matching `(key, value)` pairs
    async fn get_query_result(&self, selector: &Selector) -> Result<QueryIterator, LedgerError>;

    /// Short backend name for logs and readiness reports
    fn backend_name(&self) -> &'static str;
}

/// Query cursor over results that were fetched up front
///
/// Both bundled backends materialize matches before returning, so closing
/// only releases the buffer. Dropping an unclosed cursor closes it.
#[derive(Debug)]
pub struct BufferedQueryIterator {
    records: std::vec::IntoIter<QueryRecord>,
    closed: bool,
}

impl BufferedQueryIterator {
    pub fn new(records: Vec<QueryRecord>) -> Self {
        Self {
            records: records.into_iter(),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Iterator for BufferedQueryIterator {
    type Item = Result<QueryRecord, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }
        self.records.next().map(Ok)
    }
}

impl StateQueryIterator<LedgerError> for BufferedQueryIterator {
    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.records = Vec::new().into_iter();
            debug!("Closed query cursor");
        }
    }
}

impl Drop for BufferedQueryIterator {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_iterator_yields_in_order() {
        let mut iter = BufferedQueryIterator::new(vec![
            QueryRecord::new("O1", "{}"),
            QueryRecord::new("O2", "{}"),
        ]);

        assert_eq!(iter.next().unwrap().unwrap().key, "O1");
        assert_eq!(iter.next().unwrap().unwrap().key, "O2");
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_buffered_iterator_close_is_idempotent() {
        let mut iter = BufferedQueryIterator::new(vec![QueryRecord::new("O1", "{}")]);

        iter.close();
        iter.close();

        assert!(iter.is_closed());
        assert!(iter.next().is_none());
    }
}
