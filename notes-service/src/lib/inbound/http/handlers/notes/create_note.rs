use axum::extract::State;
use axum::http::StatusCode;

use super::NoteData;
use super::NoteTextRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiJson(body): ApiJson<NoteTextRequest>,
) -> Result<ApiSuccess<NoteData>, ApiError> {
    state
        .note_service
        .create_note(user.user_id, &body.note)
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::CREATED, note.into()))
}
