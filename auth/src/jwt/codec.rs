use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Lifetime of an access token in minutes.
pub const ACCESS_TOKEN_MINUTES: i64 = 15;

/// Lifetime of a refresh token in days.
pub const REFRESH_TOKEN_DAYS: i64 = 30;

/// Signs and validates one class of session token.
///
/// Each class (access, refresh) gets its own codec with its own secret, so a
/// token signed for one class never validates as the other.
/// Uses HS256 (HMAC with SHA-256) exclusively.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenCodec {
    /// Create a codec with an explicit token lifetime.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Changing the secret invalidates every outstanding token of this class
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            lifetime,
        }
    }

    /// Codec for short-lived access tokens (15 minutes).
    pub fn access(secret: &[u8]) -> Self {
        Self::new(secret, Duration::minutes(ACCESS_TOKEN_MINUTES))
    }

    /// Codec for long-lived refresh tokens (30 days).
    pub fn refresh(secret: &[u8]) -> Self {
        Self::new(secret, Duration::days(REFRESH_TOKEN_DAYS))
    }

    /// Token lifetime for this class.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a token for `user_id` valid from now.
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token for `user_id` valid from `now` until `now + lifetime`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_at(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::for_user(user_id, now, self.lifetime);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token against the current time.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as of `now`.
    ///
    /// The signature is checked first; the time window `nbf <= now < exp` is
    /// checked here with no leeway.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signed with another secret or tampered with
    /// * `Expired` - `now >= exp`
    /// * `NotYetValid` - `now < nbf`
    /// * `Malformed` - Not a parseable token or claims are missing
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                _ => TokenError::Malformed(e.to_string()),
            })?
            .claims;

        let timestamp = now.timestamp();
        if claims.is_expired(timestamp) {
            return Err(TokenError::Expired);
        }
        if claims.is_premature(timestamp) {
            return Err(TokenError::NotYetValid);
        }

        Ok(claims)
    }
}
