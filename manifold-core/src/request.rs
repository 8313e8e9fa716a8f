//! Request-side pipeline helpers: decode and validate
//!
//! Each helper either yields a usable value or returns the complete
//! terminal response as `Err`. On `Err` the response is already final; the
//! handler's only legal action is to return it unchanged.

use crate::context::OpContext;
use crate::envelope::Envelope;
use crate::response::write_json;
use crate::validate::Validate;
use axum::http::StatusCode;
use axum::response::Response;
use serde::de::DeserializeOwned;
use tracing::error;

/// Parse the JSON request body into `T`
///
/// On malformed or non-conforming input the parse failure is logged and
/// the client receives `400 {"status":"Error","error":"invalid request
/// payload"}`. The original parse error never reaches the client.
pub fn decode_request<T: DeserializeOwned>(ctx: &OpContext, body: &[u8]) -> Result<T, Response> {
    match serde_json::from_slice(body) {
        Ok(value) => Ok(value),
        Err(err) => {
            error!(op = ctx.op(), err = %err, "failed to decode request body");
            Err(write_json(
                StatusCode::BAD_REQUEST,
                &Envelope::error("invalid request payload"),
            ))
        }
    }
}

/// Check a decoded value against its declared constraints
///
/// The itemized violations are logged for operators; the client receives
/// the fixed `400 {"status":"Error","error":"invalid input data"}` body.
pub fn validate_request<T: Validate>(ctx: &OpContext, value: &T) -> Result<(), Response> {
    if let Err(violations) = value.validate() {
        error!(
            op = ctx.op(),
            violations = %violations,
            "validation failed"
        );
        return Err(write_json(
            StatusCode::BAD_REQUEST,
            &Envelope::error("invalid input data"),
        ));
    }
    Ok(())
}
