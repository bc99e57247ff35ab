use crate::jwt::Claims;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and session
/// token issuance.
///
/// Owns one codec per token class. Constructed once at startup with both
/// secrets and shared behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    access_codec: TokenCodec,
    refresh_codec: TokenCodec,
    dummy_hash: String,
}

/// Freshly issued session tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,
    /// Long-lived refresh token
    pub refresh_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `access_secret` - Secret for signing access tokens
    /// * `refresh_secret` - Secret for signing refresh tokens
    pub fn new(access_secret: &[u8], refresh_secret: &[u8]) -> Self {
        let password_hasher = PasswordHasher::new();
        let dummy_hash = password_hasher
            .hash("dummy-password-for-timing")
            .unwrap_or_default();

        Self {
            password_hasher,
            access_codec: TokenCodec::access(access_secret),
            refresh_codec: TokenCodec::refresh(refresh_secret),
            dummy_hash,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Spend the same effort as a real verification when there is no stored
    /// hash to check against, so a missing account is not observable by timing.
    pub fn verify_against_dummy(&self, password: &str) {
        let _ = self.password_hasher.verify(password, &self.dummy_hash);
    }

    /// Verify credentials and issue a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_pair(user_id)?)
    }

    /// Issue a new access + refresh token pair without password verification.
    ///
    /// Used after a refresh token has already been checked.
    pub fn issue_pair(&self, user_id: i64) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.access_codec.issue(user_id)?,
            refresh_token: self.refresh_codec.issue(user_id)?,
        })
    }

    /// Validate an access token.
    pub fn validate_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.access_codec.validate(token)
    }

    /// Validate a refresh token's signature and time window.
    pub fn validate_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.refresh_codec.validate(token)
    }
}
