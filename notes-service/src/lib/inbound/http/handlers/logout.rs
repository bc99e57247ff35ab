use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::router::AppState;

/// Clear both session cookies. Always succeeds; the stored refresh token is
/// left as is and simply stops reaching the server.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<MessageData>) {
    (
        state.cookies.clear(jar),
        ApiSuccess::new(StatusCode::OK, MessageData::new("Logged out")),
    )
}
