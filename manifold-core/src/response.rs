//! Response-side pipeline helpers
//!
//! The single place where envelopes are written to the wire and where
//! failures are mapped to a client-visible shape.

use crate::context::OpContext;
use crate::envelope::Envelope;
use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, info, warn};

/// Write a bare success envelope at 200
pub fn respond_ok(ctx: &OpContext) -> Response {
    info!(op = ctx.op(), "operation successful");
    write_json(StatusCode::OK, &Envelope::ok())
}

/// Write a success envelope carrying `data` at 200
///
/// Body encoding is best-effort: a payload that cannot be converted to
/// JSON is logged and dropped, and the bare success envelope is written
/// instead. Encoding failures are never surfaced to the caller.
pub fn respond_data<T: Serialize>(ctx: &OpContext, data: T) -> Response {
    let envelope = match serde_json::to_value(data) {
        Ok(value) => Envelope::ok().with_data(value),
        Err(err) => {
            warn!(op = ctx.op(), err = %err, "failed to encode response payload");
            Envelope::ok()
        }
    };
    info!(op = ctx.op(), "operation successful");
    write_json(StatusCode::OK, &envelope)
}

/// Map a failure to its terminal response
///
/// A classified error is forwarded verbatim: its status, message, and any
/// attached payload. Everything else is reported as `500 internal server
/// error` with the detail kept in the log; internal error text never
/// reaches the client.
pub fn respond_error(ctx: &OpContext, err: &Error) -> Response {
    match err {
        Error::Http(http_err) => {
            error!(op = ctx.op(), err = %http_err, "handled error");
            let mut envelope = Envelope::error(http_err.message());
            if let Some(data) = http_err.data() {
                envelope = envelope.with_data(data.clone());
            }
            write_json(http_err.status(), &envelope)
        }
        Error::Other(other) => {
            error!(op = ctx.op(), err = %other, "internal error");
            write_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &Envelope::error("internal server error"),
            )
        }
    }
}

pub(crate) fn write_json(status: StatusCode, envelope: &Envelope) -> Response {
    (status, Json(envelope)).into_response()
}
