//! In-memory user directory
//!
//! The business layer behind the handlers. Expected failures are raised as
//! classified errors; the store never touches the HTTP response itself.

use crate::api::{BatchFailure, BatchOutcome, CreateUserRequest, UserRecord};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use manifold_core::{HttpError, Result};
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe in-memory user store, keyed by name
///
/// Shared across request flows behind an `Arc`; all operations are
/// synchronous and lock-free from the caller's point of view.
#[derive(Debug)]
pub struct UserStore {
    users: DashMap<String, UserRecord>,
    next_id: AtomicU64,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        UserStore {
            users: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when no users are stored
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Insert a new user; a duplicate name is a conflict
    pub fn create(&self, req: &CreateUserRequest) -> Result<UserRecord> {
        match self.users.entry(req.name.clone()) {
            Entry::Occupied(_) => Err(HttpError::conflict("user already exists").into()),
            Entry::Vacant(slot) => {
                let record = UserRecord {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    name: req.name.clone(),
                    email: req.email.clone(),
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    /// Look up a user by id
    pub fn get(&self, id: u64) -> Result<UserRecord> {
        self.users
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| HttpError::not_found("user not found").into())
    }

    /// Remove a user by id
    pub fn delete(&self, id: u64) -> Result<()> {
        let name = self
            .users
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.key().clone());
        match name {
            Some(name) => {
                self.users.remove(&name);
                Ok(())
            }
            None => Err(HttpError::not_found("user not found").into()),
        }
    }

    /// Create several users in order
    ///
    /// A mixed outcome is reported as a conflict whose payload itemizes
    /// what was created and what was rejected; entries created before a
    /// rejection stay in the store.
    pub fn create_batch(&self, requests: &[CreateUserRequest]) -> Result<BatchOutcome> {
        let mut outcome = BatchOutcome {
            created: Vec::new(),
            failed: Vec::new(),
        };

        for req in requests {
            match self.create(req) {
                Ok(record) => outcome.created.push(record),
                Err(err) => outcome.failed.push(BatchFailure {
                    name: req.name.clone(),
                    reason: err.to_string(),
                }),
            }
        }

        if outcome.failed.is_empty() {
            Ok(outcome)
        } else {
            let data = serde_json::to_value(&outcome).map_err(anyhow::Error::from)?;
            Err(HttpError::conflict("some users were not created")
                .with_data(data)
                .into())
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
