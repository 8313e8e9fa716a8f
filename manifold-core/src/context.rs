//! Per-request log correlation

use std::sync::Arc;

/// Operation label threaded through the pipeline helpers
///
/// Identifies one handler invocation in log output. It carries no domain
/// meaning and has no lifecycle beyond the request; handlers create one at
/// the top and pass it by reference to every helper.
#[derive(Debug, Clone)]
pub struct OpContext {
    op: Arc<str>,
}

impl OpContext {
    /// Create a context for the named operation
    pub fn new(op: impl Into<String>) -> Self {
        OpContext {
            op: Arc::from(op.into().into_boxed_str()),
        }
    }

    /// The operation label
    pub fn op(&self) -> &str {
        &self.op
    }
}
