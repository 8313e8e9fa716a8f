//! Capability interface for the external validation-rule engine
//!
//! The pipeline treats validation as a black box: given a value whose
//! fields declare constraints, the engine returns zero or more violations.
//! Rule semantics belong to the implementor.

use std::fmt;

/// One declared-constraint breach on a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field that failed the constraint
    pub field: String,
    /// Constraint that was breached (e.g. "required", "min_length")
    pub rule: String,
    /// Operator-facing description of the breach
    pub message: String,
}

impl Violation {
    /// Create a violation record
    pub fn new(
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Violation {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.rule)
    }
}

/// Set of violations reported by a validator; never empty when returned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// True when no violations were recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded violations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the recorded violations
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Finish accumulating: `Ok` when nothing was recorded
    pub fn into_result(self) -> Result<(), Violations> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Validation capability implemented by request types
pub trait Validate {
    /// Check the value against its declared constraints
    fn validate(&self) -> Result<(), Violations>;
}
