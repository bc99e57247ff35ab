use axum::extract::State;
use axum::http::StatusCode;

use super::DeletedData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_all_notes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<ApiSuccess<DeletedData>, ApiError> {
    state
        .note_service
        .delete_all(user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|deleted| ApiSuccess::new(StatusCode::OK, DeletedData { deleted }))
}
