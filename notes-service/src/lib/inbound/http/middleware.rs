use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use super::cookies::ACCESS_TOKEN_COOKIE;
use super::handlers::ApiError;
use crate::domain::identity::models::UserId;

const UNAUTHORIZED: &str = "Authentication required";

/// Extension type carrying the identity proven by the access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates the `access_token` cookie and adds the
/// authenticated identity to request extensions.
///
/// Every failure stops the request with 401 before the handler runs. The
/// credential store is never consulted.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = jar.get(ACCESS_TOKEN_COOKIE).ok_or_else(|| {
        tracing::debug!("Access token cookie missing");
        unauthorized()
    })?;

    let claims = authenticator.validate_access(token.value()).map_err(|e| {
        tracing::warn!(error = %e, "Access token rejected");
        unauthorized()
    })?;

    let user_id = UserId::new(claims.user_id).map_err(|e| {
        tracing::warn!(error = %e, "Access token carries an invalid user id");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(UNAUTHORIZED.to_string()).into_response()
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::error!("Protected handler reached without an authenticated identity");
                ApiError::Unauthorized(UNAUTHORIZED.to_string())
            })
    }
}
