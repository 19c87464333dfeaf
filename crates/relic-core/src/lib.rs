//! # Relic Core
//!
//! Record types and pure helpers for the relic order ledger.
//!
//! ## Key Concepts
//!
//! - **Order**: one artifact custody/sale transaction, built from 24
//!   positional string arguments and stored as a JSON document under its
//!   `orderID`
//! - **Selector**: a field-equality rich query handed to the ledger
//! - **Query assembly**: folding `(key, document)` query results into a single
//!   `[{"Key": ..., "Record": ...}]` array
//!
//! Nothing in this crate performs I/O. The ledger itself lives behind the
//! `LedgerGateway` trait in `relic-ledger`.

pub mod error;
pub mod order;
pub mod query;

pub use error::{OrderError, Result};
pub use order::{Order, ORDER_FIELD_COUNT, ORDER_ID_FIELD, RELIC_ID_FIELD};
pub use query::{assemble_results, QueryRecord, Selector, StateQueryIterator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
