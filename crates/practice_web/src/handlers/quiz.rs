//! Quiz endpoints: canned status/body replies, no storage access.
//!
//! Malformed query strings never reach these functions; the `Query`
//! extractor rejects them with 400. JSON bodies that fail to bind are
//! answered with 400 as well, except a missing JSON content type (415).

use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;
use practice_core::{reply_for_body, reply_for_query, Code, QuizReply};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    pub code: i32,
}

/// `GET /quiz?code=<int>`
pub async fn quiz_by_query(Query(query): Query<QuizQuery>) -> (StatusCode, &'static str) {
    let reply = reply_for_query(query.code);
    let status = status_for(reply);
    debug!(
        "event=quiz_reply module=web entry=query code={} http_status={}",
        query.code,
        status.as_u16()
    );
    (status, reply.body())
}

/// `POST /quiz` with `{"value": <int>}`
pub async fn quiz_by_body(payload: Result<Json<Code>, JsonRejection>) -> Response {
    let Json(code) = match payload {
        Ok(payload) => payload,
        Err(rejection @ JsonRejection::MissingJsonContentType(_)) => {
            return rejection.into_response();
        }
        Err(rejection) => {
            debug!(
                "event=quiz_reply module=web entry=body status=rejected http_status=400 error={}",
                rejection.body_text()
            );
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    let reply = reply_for_body(code);
    let status = status_for(reply);
    debug!(
        "event=quiz_reply module=web entry=body code={} http_status={}",
        code.value,
        status.as_u16()
    );
    (status, reply.body()).into_response()
}

fn status_for(reply: QuizReply) -> StatusCode {
    match reply {
        QuizReply::Ok => StatusCode::OK,
        QuizReply::Created => StatusCode::CREATED,
        QuizReply::BadRequest => StatusCode::BAD_REQUEST,
        QuizReply::Forbidden => StatusCode::FORBIDDEN,
    }
}

#[cfg(test)]
mod tests {
    use super::status_for;
    use axum::http::StatusCode;
    use practice_core::QuizReply;

    #[test]
    fn replies_map_to_http_statuses() {
        assert_eq!(status_for(QuizReply::Ok), StatusCode::OK);
        assert_eq!(status_for(QuizReply::Created), StatusCode::CREATED);
        assert_eq!(status_for(QuizReply::BadRequest), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(QuizReply::Forbidden), StatusCode::FORBIDDEN);
    }
}
