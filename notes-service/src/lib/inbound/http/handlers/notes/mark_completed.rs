use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiPath;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn mark_completed(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<MarkCompletedRequest>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    state
        .note_service
        .mark_completed(user.user_id, id, body.check)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::new("Note updated")))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkCompletedRequest {
    check: bool,
}
