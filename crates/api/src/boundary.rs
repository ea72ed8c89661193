//! Page-level error boundary for handler panics.
//!
//! Installed through `CatchPanicLayer::custom`. The client is told to
//! reload; the panic message is only included when configured to expose
//! error detail.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Build the response returned in place of a panicking handler.
pub fn panic_response(err: Box<dyn Any + Send + 'static>, expose_detail: bool) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic payload".to_string()
    };

    tracing::error!(detail = %detail, "Handler panicked");

    let mut body = json!({
        "error": "Something went wrong",
        "code": "INTERNAL_ERROR",
        "action": "reload",
    });
    if expose_detail {
        body["detail"] = json!(detail);
    }

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
