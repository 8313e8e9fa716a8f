//! The uniform JSON response envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome marker carried by every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The operation succeeded
    #[serde(rename = "OK")]
    Ok,
    /// The operation failed
    #[serde(rename = "Error")]
    Error,
}

/// Uniform response body: `{"status", "error"?, "data"?}`
///
/// `error` is present only on failures. `data` may accompany either status;
/// a failure carrying data reports a partial outcome, such as a batch
/// operation where some items succeeded. Omitted fields are absent on the
/// wire, never null or empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Outcome marker
    pub status: Status,

    /// Human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Caller-supplied payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Create a success envelope with no payload
    pub fn ok() -> Self {
        Envelope {
            status: Status::Ok,
            error: None,
            data: None,
        }
    }

    /// Create a failure envelope with the given message
    pub fn error(message: impl Into<String>) -> Self {
        Envelope {
            status: Status::Error,
            error: Some(message.into()),
            data: None,
        }
    }

    /// Attach a payload to the envelope
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
