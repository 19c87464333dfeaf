//! Core logic for the relic ledger

mod orders;

pub use orders::{OrderService, WRITE_SUCCESS};
