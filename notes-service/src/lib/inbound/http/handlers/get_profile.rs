use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::Identity;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    state
        .auth_service
        .profile(user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::OK, identity.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&Identity> for ProfileResponseData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.as_i64(),
            username: identity.username.clone(),
            email: identity.email.clone(),
        }
    }
}
