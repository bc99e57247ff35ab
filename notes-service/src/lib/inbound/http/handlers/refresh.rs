use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::cookies::REFRESH_TOKEN_COOKIE;
use crate::inbound::http::router::AppState;

/// Exchange the `refresh_token` cookie for a rotated pair of session cookies.
///
/// Every failure, including a store outage, is a 401 so the client falls
/// back to logging in again.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<MessageData>), ApiError> {
    let unauthorized = || ApiError::Unauthorized("Unauthorized".to_string());

    let presented = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            tracing::debug!("Refresh token cookie missing");
            unauthorized()
        })?;

    let pair = state
        .refresh_service
        .refresh(&presented)
        .await
        .map_err(|e| {
            tracing::info!(kind = e.kind().as_str(), reason = %e, "Refresh rejected");
            unauthorized()
        })?;

    Ok((
        state.cookies.issue(jar, pair),
        ApiSuccess::new(StatusCode::OK, MessageData::new("Tokens refreshed")),
    ))
}
