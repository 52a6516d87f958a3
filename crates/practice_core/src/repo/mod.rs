//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for members.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Absence is a value (`Option`), not an error.
//! - Repositories only accept connections opened through `db::open_db*`.

pub mod member_repo;
