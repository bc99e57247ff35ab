use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::MessageData;
use super::INVALID_CREDENTIALS;
use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::LoginCommand;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<(CookieJar, ApiSuccess<MessageData>), ApiError> {
    let command = LoginCommand::new(&body.email, &body.password)?;

    let pair = state
        .auth_service
        .login(command)
        .await
        .map_err(|e| match e {
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                tracing::info!(kind = e.kind().as_str(), reason = %e, "Login rejected");
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            _ => ApiError::from(e),
        })?;

    Ok((
        state.cookies.issue(jar, pair),
        ApiSuccess::new(StatusCode::OK, MessageData::new("Logged in")),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}
