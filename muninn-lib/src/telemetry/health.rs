use hyper::body::Bytes;
use hyper::Response;
use hyper::StatusCode;
use serde_json::json;

use crate::error::{MuninnError, Result};
use crate::server::response::{full_body, RespBody};

/// Health check response - always returns 200 if process is running
pub fn health_check_response() -> Result<Response<RespBody>> {
    status_response(StatusCode::OK, json!({"status": "healthy"}))
}

/// Liveness check - always returns 200 if process is running
pub fn live_check_response() -> Result<Response<RespBody>> {
    status_response(StatusCode::OK, json!({"status": "alive"}))
}

fn status_response(status: StatusCode, body: serde_json::Value) -> Result<Response<RespBody>> {
    let body_bytes = serde_json::to_vec(&body)
        .map_err(|e| MuninnError::Http(format!("Failed to serialize status response: {e}")))?;

    Response::builder()
        .status(status)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(full_body(Bytes::from(body_bytes)))
        .map_err(|e| MuninnError::Http(format!("Failed to build status response: {e}")))
}
