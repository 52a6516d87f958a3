//! Member domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the service.
//! - Expose the one sanctioned mutation (`change_name`).
//!
//! # Invariants
//! - `id` is never changed once the record has been stored.
//! - `name` is always present; an empty string is a valid name.
//! - A rename is only durable after the record is saved again.

use serde::{Deserialize, Serialize};

/// Storage identifier of a member row.
pub type MemberId = i64;

/// Persisted member record.
///
/// `id` is `None` for records that were constructed without a caller-supplied
/// key and have not been saved yet; the store assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Option<MemberId>,
    pub name: String,
}

impl Member {
    /// Creates a member with a caller-supplied identifier.
    ///
    /// Saving it inserts or replaces the row with the same `id`.
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Creates a member whose identifier is assigned by storage on save.
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Replaces the member name in memory.
    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns whether storage has (or was told) an identifier for this record.
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }
}
