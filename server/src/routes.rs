use axum::{Json, body::Bytes, http::StatusCode, response::IntoResponse};
use planner_payloads::Acknowledgment;
use serde_json::Value;
use tracing::info;

use crate::error::AppError;

/// Accepts any JSON body, logs it, and acknowledges. The payload is not
/// validated against a schema and is not stored anywhere.
pub async fn program_counts_handler(body: Bytes) -> Result<impl IntoResponse, AppError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|_| AppError::MalformedPayload)?;

    info!("Received program counts: {payload}");

    Ok((StatusCode::OK, Json(Acknowledgment::received())))
}
