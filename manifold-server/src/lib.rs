//! Manifold demo server - an in-memory user directory
//!
//! This crate shows the response pipeline end to end: every handler is a
//! decode -> validate -> store -> respond sequence, and every outcome the
//! pipeline can produce has a route that reaches it.

pub mod api;
pub mod handlers;
pub mod metrics;
pub mod state;
pub mod store;

pub use api::{BatchCreateRequest, BatchOutcome, CreateUserRequest, UserRecord};
pub use state::AppState;
pub use store::UserStore;
