//! Manifold Core - Uniform HTTP request/response plumbing
//!
//! This crate provides the JSON response envelope, classified HTTP errors,
//! and the decode/validate/respond helpers that keep handler outcomes
//! consistent across a service.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod context;
pub mod envelope;
pub mod error;
pub mod request;
pub mod response;
pub mod validate;

pub use context::OpContext;
pub use envelope::{Envelope, Status};
pub use error::{Error, HttpError, Result};
pub use request::{decode_request, validate_request};
pub use response::{respond_data, respond_error, respond_ok};
pub use validate::{Validate, Violation, Violations};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
