//! API request handlers

pub mod invoke;

pub use invoke::{invoke, AppState, InvokeRequest};
