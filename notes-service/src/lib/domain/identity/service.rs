use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenPair;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::UserId;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::CredentialStore;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<Identity, AuthError> {
        let existing = self
            .store
            .find_by_username_or_email(&command.username, &command.email)
            .await?;

        if existing.is_some() {
            tracing::info!(
                kind = "conflict",
                "Registration rejected: username or email taken"
            );
            return Err(AuthError::AlreadyExists);
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| AuthError::PasswordHashing(e.to_string()))?
                .map_err(|e| AuthError::PasswordHashing(e.to_string()))?;

        let identity = self
            .store
            .create(NewIdentity {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %identity.id, "Identity registered");

        Ok(identity)
    }

    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError> {
        let found = self.store.find_by_email(&command.email).await?;
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        // Argon2 is CPU-bound; keep it off the async workers.
        let Some(identity) = found else {
            tokio::task::spawn_blocking(move || authenticator.verify_against_dummy(&password))
                .await
                .map_err(|e| AuthError::PasswordHashing(e.to_string()))?;
            return Err(AuthError::UserNotFound);
        };

        let password_hash = identity.password_hash.clone();
        let user_id = identity.id.as_i64();
        let pair = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &password_hash, user_id)
        })
        .await
        .map_err(|e| AuthError::PasswordHashing(e.to_string()))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            AuthenticationError::Token(err) => AuthError::from(err),
        })?;

        // Overwrites any previous refresh token, revoking it.
        self.store
            .update_refresh_token(identity.id, &pair.refresh_token)
            .await?;

        tracing::info!(user_id = %identity.id, "Login succeeded");

        Ok(pair)
    }

    async fn profile(&self, user_id: UserId) -> Result<Identity, AuthError> {
        self.store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
