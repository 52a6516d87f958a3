//! Member listing endpoint.

use crate::app::AppState;
use crate::error::ApiError;
use axum::extract::State;
use axum::Json;
use log::debug;
use practice_core::{Member, MemberRepository, SqliteMemberRepository};

/// `GET /test`: every stored member as a JSON array.
pub async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<Member>>, ApiError> {
    let members = state.with_connection(|conn| {
        let repo = SqliteMemberRepository::try_new(conn)?;
        Ok(repo.find_all()?)
    })?;

    debug!(
        "event=member_list module=web status=ok count={}",
        members.len()
    );
    Ok(Json(members))
}
