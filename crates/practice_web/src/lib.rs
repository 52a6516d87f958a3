//! HTTP surface of the member practice service.
//!
//! # Responsibility
//! - Expose quiz and member listing endpoints over axum.
//! - Resolve runtime configuration and bootstrap logging and storage.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;

pub use app::{build_router, AppState};
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

use practice_core::{init_console_logging, init_logging, open_db, open_db_in_memory, DbResult};
use rusqlite::Connection;

/// Initializes logging for the configured sink.
pub fn init_server_logging(config: &ServerConfig) -> Result<(), String> {
    match config.log_dir.as_deref() {
        Some(dir) => init_logging(&config.log_level, dir),
        None => init_console_logging(&config.log_level),
    }
}

/// Opens the configured member store with migrations applied.
pub fn open_store(config: &ServerConfig) -> DbResult<Connection> {
    match config.db_path.as_ref() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
}
