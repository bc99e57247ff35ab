//! Authentication utilities library
//!
//! Building blocks for the session layer of the notes service:
//! - Password hashing (Argon2id)
//! - Email syntax validation
//! - Access / refresh token issuance and validation (HS256)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::access(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue(42).unwrap();
//! let claims = codec.validate(&token).unwrap();
//! assert_eq!(claims.user_id, 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(
//!     b"access_secret_at_least_32_bytes_long",
//!     b"refresh_secret_at_least_32_bytes_lon",
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token pair
//! let pair = auth.authenticate("password123", &hash, 42).unwrap();
//!
//! // Validate the access token
//! let claims = auth.validate_access(&pair.access_token).unwrap();
//! assert_eq!(claims.user_id, 42);
//! ```

pub mod authenticator;
pub mod email;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use email::EmailError;
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
