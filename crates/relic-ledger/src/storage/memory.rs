//! In-memory ledger backend
//!
//! Default ledger implementation using an ordered in-memory map.
//! Suitable for development, tests and single-instance deployments.
//! Data is lost on restart.

use async_trait::async_trait;
use relic_core::{QueryRecord, Selector};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

use super::{BufferedQueryIterator, LedgerError, LedgerGateway, QueryIterator};

/// In-memory ledger implementation
///
/// Keys are kept ordered, so query results come back sorted by key.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryLedger {
    /// Create a new, empty in-memory ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.state.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> LedgerError {
    LedgerError::Database("ledger state lock poisoned".into())
}

#[async_trait]
impl LedgerGateway for MemoryLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        let mut state = self.state.write().map_err(poisoned)?;
        debug!(key = %key, bytes = value.len(), "Putting state");
        state.insert(key.to_string(), value);
        Ok(())
    }

    async fn put_state_if_absent(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        let mut state = self.state.write().map_err(poisoned)?;
        match state.entry(key.to_string()) {
            Entry::Occupied(_) => Err(LedgerError::AlreadyExists(key.to_string())),
            Entry::Vacant(slot) => {
                info!(key = %key, bytes = value.len(), "Inserting state");
                slot.insert(value);
                Ok(())
            }
        }
    }

    async fn get_query_result(&self, selector: &Selector) -> Result<QueryIterator, LedgerError> {
        let state = self.state.read().map_err(poisoned)?;
        let records: Vec<QueryRecord> = state
            .iter()
            .filter(|(_, value)| selector.matches(value))
            .map(|(key, value)| QueryRecord::new(key.clone(), value.clone()))
            .collect();

        debug!(selector = %selector, matches = records.len(), "Executed rich query");
        Ok(Box::new(BufferedQueryIterator::new(records)))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
