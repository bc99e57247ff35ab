use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn protected(user: AuthenticatedUser) -> ApiSuccess<ProtectedResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        ProtectedResponseData {
            message: "Access granted".to_string(),
            user_id: user.user_id.as_i64(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedResponseData {
    pub message: String,
    pub user_id: i64,
}
