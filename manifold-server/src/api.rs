//! API request and response types

use manifold_core::{Validate, Violation, Violations};
use serde::{Deserialize, Serialize};

/// Request to create a single user
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateUserRequest {
    /// Display name; required, at least 2 characters
    pub name: String,

    /// Contact address; required, must look like an email
    pub email: String,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), Violations> {
        let mut violations = Violations::new();
        check_name("name", &self.name, &mut violations);
        check_email("email", &self.email, &mut violations);
        violations.into_result()
    }
}

/// Stored user returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Assigned identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// Contact address
    pub email: String,
}

/// Request to create several users at once
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchCreateRequest {
    /// Users to create, in order
    pub users: Vec<CreateUserRequest>,
}

/// Upper bound on batch size; larger requests are rejected outright
pub const MAX_BATCH_SIZE: usize = 100;

impl Validate for BatchCreateRequest {
    fn validate(&self) -> Result<(), Violations> {
        let mut violations = Violations::new();
        if self.users.is_empty() {
            violations.push(Violation::new("users", "required", "must not be empty"));
        } else if self.users.len() > MAX_BATCH_SIZE {
            violations.push(Violation::new(
                "users",
                "max_items",
                format!("must not exceed {} entries", MAX_BATCH_SIZE),
            ));
        }
        for (i, user) in self.users.iter().enumerate() {
            check_name(&format!("users[{}].name", i), &user.name, &mut violations);
            check_email(&format!("users[{}].email", i), &user.email, &mut violations);
        }
        violations.into_result()
    }
}

/// Outcome of a batch create: which entries landed and which did not
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Users created
    pub created: Vec<UserRecord>,

    /// Entries rejected, with the reason
    pub failed: Vec<BatchFailure>,
}

/// One rejected batch entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    /// Name from the rejected entry
    pub name: String,

    /// Why it was rejected
    pub reason: String,
}

/// Health check response, carried in the envelope's data field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service version
    pub version: String,

    /// Uptime in seconds
    pub uptime_seconds: u64,

    /// Number of stored users
    pub users: usize,
}

fn check_name(field: &str, name: &str, violations: &mut Violations) {
    if name.trim().is_empty() {
        violations.push(Violation::new(field, "required", "must not be empty"));
    } else if name.chars().count() < 2 {
        violations.push(Violation::new(
            field,
            "min_length",
            "must be at least 2 characters",
        ));
    }
}

fn check_email(field: &str, email: &str, violations: &mut Violations) {
    if email.trim().is_empty() {
        violations.push(Violation::new(field, "required", "must not be empty"));
    } else if !email.contains('@') {
        violations.push(Violation::new(field, "format", "must be an email address"));
    }
}
