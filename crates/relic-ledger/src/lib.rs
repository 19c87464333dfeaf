//! Relic Ledger Server
//!
//! Records provenance transactions ("orders") for physical artifacts and
//! serves them back by order ID or by artifact ID:
//! - Validates the 24 positional order fields
//! - Rejects a second order under an existing `orderID`
//! - Returns stored documents byte-for-byte
//! - Builds field-equality rich queries and assembles their results
//!
//! ## Operations
//!
//! - `addneworder` (24 args) - record a new order
//! - `getorder` (1 arg) - fetch one order by `orderID`
//! - `getorderbyrelicid` (1 arg) - fetch all orders for a `relicID`
//!
//! ## API Endpoints
//!
//! - `GET /health` - Liveness check
//! - `GET /ready` - Readiness check with backend info
//! - `POST /v1/invoke` - Invoke an operation by name
//!
//! ## Ledger Backends
//!
//! - [`MemoryLedger`] - in-memory, the default
//! - `PostgresLedger` - PostgreSQL, behind the `postgres` feature

pub mod api;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod storage;

pub use api::create_router;
pub use api::handlers::AppState;
pub use config::{ConfigError, LedgerConfig};
pub use crate::core::{OrderService, WRITE_SUCCESS};
pub use dispatch::{Dispatcher, Operation, INIT_SUCCESS};
pub use storage::{BufferedQueryIterator, LedgerError, LedgerGateway, MemoryLedger, QueryIterator};
#[cfg(feature = "postgres")]
pub use storage::PostgresLedger;
