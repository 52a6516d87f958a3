//! Domain model for the member practice service.
//!
//! # Responsibility
//! - Define the data structures shared by storage, services and the web layer.
//!
//! # Invariants
//! - Every stored record is identified by a unique `MemberId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod member;
