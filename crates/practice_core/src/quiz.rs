//! Quiz reply rules.
//!
//! # Responsibility
//! - Map a submitted integer to one of a fixed set of replies.
//!
//! # Invariants
//! - Replies depend only on the submitted value; no state, no I/O.
//! - The query-string and JSON-body entry points use different tables.

use serde::{Deserialize, Serialize};

/// JSON body accepted by the POST quiz entry point: `{"value": <int>}`.
///
/// A body without `value` binds as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub value: i32,
}

/// Canned quiz outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizReply {
    Ok,
    Created,
    BadRequest,
    Forbidden,
}

impl QuizReply {
    /// Plain-text response body.
    pub fn body(self) -> &'static str {
        match self {
            Self::Ok => "Ok!",
            Self::Created => "Created!",
            Self::BadRequest => "Bad Request!",
            Self::Forbidden => "Forbidden!",
        }
    }
}

/// Reply for `GET /quiz?code=<code>`.
pub fn reply_for_query(code: i32) -> QuizReply {
    match code {
        1 => QuizReply::Created,
        2 => QuizReply::BadRequest,
        _ => QuizReply::Ok,
    }
}

/// Reply for `POST /quiz` with a JSON `Code` body.
pub fn reply_for_body(code: Code) -> QuizReply {
    match code.value {
        1 => QuizReply::Forbidden,
        _ => QuizReply::Ok,
    }
}
