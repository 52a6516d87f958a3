//! Router assembly and shared request state.
//!
//! # Responsibility
//! - Wire handlers to paths and methods.
//! - Hand the member store to handlers through explicit state.
//!
//! # Invariants
//! - One SQLite connection is shared; a request holds its lock for the whole
//!   storage interaction.

use crate::error::ApiError;
use crate::handlers::{healthz, members, quiz};
use axum::routing::get;
use axum::Router;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a connection opened through `practice_core::open_db*`.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `work` with exclusive access to the member store.
    pub fn with_connection<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ApiError>,
    {
        let mut conn = self.conn.lock().map_err(|_| ApiError::StoreUnavailable)?;
        work(&mut *conn)
    }
}

/// Builds the HTTP router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/quiz", get(quiz::quiz_by_query).post(quiz::quiz_by_body))
        .route("/test", get(members::list_members))
        .with_state(state)
}
