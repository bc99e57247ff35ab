use async_trait::async_trait;
use auth::TokenPair;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::StoreError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::UserId;

/// Port for registration, login and profile operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new identity. No tokens are issued.
    ///
    /// # Arguments
    /// * `command` - Trimmed, escaped and validated registration fields
    ///
    /// # Returns
    /// The persisted identity
    ///
    /// # Errors
    /// * `AlreadyExists` - Username or email is taken
    /// * `StoreUnavailable` - Credential store failed
    /// * `PasswordHashing` - Hashing failed
    async fn register(&self, command: RegisterCommand) -> Result<Identity, AuthError>;

    /// Verify credentials, issue a token pair and record the refresh token.
    ///
    /// # Errors
    /// * `UserNotFound` - No identity with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenIssuanceFailed` - Signing failed
    /// * `StoreUnavailable` - Credential store failed
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError>;

    /// Load the identity behind an authenticated request.
    ///
    /// # Errors
    /// * `UserNotFound` - Identity no longer exists
    /// * `StoreUnavailable` - Credential store failed
    async fn profile(&self, user_id: UserId) -> Result<Identity, AuthError>;
}

/// Port for refresh-token rotation.
#[async_trait]
pub trait RefreshServicePort: Send + Sync + 'static {
    /// Exchange a refresh token for a fresh token pair.
    ///
    /// The presented token is consumed: on success it is replaced in the store
    /// and cannot be used again.
    ///
    /// # Errors
    /// * `Token` - Signature, time window or format check failed
    /// * `UserNotFound` - Identity no longer exists
    /// * `TokenSuperseded` - Token is not the one on file
    /// * `TokenIssuanceFailed` - Signing failed
    /// * `StoreUnavailable` - Credential store failed
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
}

/// Persistence operations for identities.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find any identity holding this username or this email.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Identity>, StoreError>;

    /// Persist a new identity with no refresh token.
    ///
    /// # Errors
    /// * `Conflict` - Username or email unique constraint violated
    /// * `Unavailable` - Store operation failed
    async fn create(&self, identity: NewIdentity) -> Result<Identity, StoreError>;

    /// Retrieve identity by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError>;

    /// Retrieve identity by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<Identity>, StoreError>;

    /// Unconditionally overwrite the stored refresh token.
    async fn update_refresh_token(&self, id: UserId, token: &str) -> Result<(), StoreError>;

    /// Atomically replace the stored refresh token only if it still equals
    /// `expected`.
    ///
    /// # Returns
    /// `true` when the swap happened, `false` when the stored value differed
    async fn replace_refresh_token(
        &self,
        id: UserId,
        expected: &str,
        new_token: &str,
    ) -> Result<bool, StoreError>;
}
