//! HTTP-facing error type for storage-backed handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use practice_core::{DbError, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    Repo(RepoError),
    /// The shared connection lock was poisoned by a panicking request.
    StoreUnavailable,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::StoreUnavailable => write!(f, "member store lock poisoned"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::StoreUnavailable => None,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        error!(
            "event=http_request module=web status=error http_status={} error={}",
            status.as_u16(),
            self
        );
        (status, self.to_string()).into_response()
    }
}
