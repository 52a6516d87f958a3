//! Core domain logic for the member practice service.
//! This crate owns storage, member use-cases and the quiz reply rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod quiz;
pub mod repo;
pub mod service;

pub use db::{in_unit_of_work, open_db, open_db_in_memory, DbError, DbResult, UnitOfWork};
pub use logging::{
    default_log_level, init_console_logging, init_logging, logging_status, LogSink,
};
pub use model::member::{Member, MemberId};
pub use quiz::{reply_for_body, reply_for_query, Code, QuizReply};
pub use repo::member_repo::{MemberRepository, RepoError, RepoResult, SqliteMemberRepository};
pub use service::member_service::MemberService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
