use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenPair;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::UserId;
use crate::domain::identity::ports::CredentialStore;
use crate::domain::identity::ports::RefreshServicePort;

/// Refresh-token rotation.
///
/// A refresh token is honored only while it is the one on file for its
/// identity. Every successful exchange swaps in the new token, so each
/// refresh token is single-use.
pub struct RefreshService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
}

impl<CS> RefreshService<CS>
where
    CS: CredentialStore,
{
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }
}

#[async_trait]
impl<CS> RefreshServicePort for RefreshService<CS>
where
    CS: CredentialStore,
{
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self
            .authenticator
            .validate_refresh(refresh_token)
            .map_err(AuthError::Token)?;

        let user_id = UserId::new(claims.user_id).map_err(|_| AuthError::UserNotFound)?;

        let identity = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let on_file = identity.refresh_token.as_deref().unwrap_or_default();
        if !constant_time_eq(on_file.as_bytes(), refresh_token.as_bytes()) {
            tracing::warn!(user_id = %user_id, "Refresh token is not the one on file");
            return Err(AuthError::TokenSuperseded);
        }

        let pair = self.authenticator.issue_pair(user_id.as_i64())?;

        // A concurrent exchange of the same token may have won since the read.
        let swapped = self
            .store
            .replace_refresh_token(user_id, refresh_token, &pair.refresh_token)
            .await?;
        if !swapped {
            tracing::warn!(user_id = %user_id, "Refresh token consumed concurrently");
            return Err(AuthError::TokenSuperseded);
        }

        tracing::debug!(user_id = %user_id, "Refresh token rotated");

        Ok(pair)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
