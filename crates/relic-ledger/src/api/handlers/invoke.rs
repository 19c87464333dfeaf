//! Invocation Handler
//!
//! Carries a dispatcher call (function name plus positional string
//! arguments) over HTTP and returns the raw payload bytes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiError;
use crate::config::LedgerConfig;
use crate::dispatch::{Dispatcher, Operation};

/// Application state shared across handlers
pub struct AppState {
    /// Routes invocations to the order service
    pub dispatcher: Dispatcher,
    /// Server configuration
    pub config: LedgerConfig,
}

/// Request to invoke a named operation
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    /// Operation name (`addneworder`, `getorder`, `getorderbyrelicid`, `init`)
    pub function: String,

    /// Positional arguments
    #[serde(default)]
    pub args: Vec<String>,
}

/// Invoke an operation
///
/// POST /v1/invoke
///
/// Documents and query arrays are returned as `application/json`;
/// confirmation strings as `text/plain`.
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    request: Result<Json<InvokeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = request?;

    let payload = state
        .dispatcher
        .invoke(&request.function, &request.args)
        .await?;

    info!(
        function = %request.function,
        bytes = payload.len(),
        "Invocation succeeded"
    );

    let content_type = match request.function.parse::<Operation>() {
        Ok(Operation::GetOrder | Operation::GetOrderByRelicId) => "application/json",
        _ => "text/plain; charset=utf-8",
    };

    Ok(([(header::CONTENT_TYPE, content_type)], payload).into_response())
}
