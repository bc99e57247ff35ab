use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Session token claims.
///
/// Access and refresh tokens carry the same claim set; only the signing
/// secret and the lifetime tell them apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identity the token authenticates
    pub user_id: i64,

    /// Unique token identifier, so two tokens minted in the same second differ
    pub jti: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims valid from `now` for `lifetime`.
    pub fn for_user(user_id: i64, now: DateTime<Utc>, lifetime: Duration) -> Self {
        let issued_at = now.timestamp();

        Self {
            user_id,
            jti: Uuid::new_v4().to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: (now + lifetime).timestamp(),
        }
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// The expiry instant itself is already outside the validity window.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Check if the token is not yet usable at `current_timestamp`.
    pub fn is_premature(&self, current_timestamp: i64) -> bool {
        current_timestamp < self.nbf
    }
}
