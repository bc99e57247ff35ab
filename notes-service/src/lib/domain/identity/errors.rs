use auth::EmailError;
use auth::TokenError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("User ID must be positive, got {0}")]
    NotPositive(i64),
}

/// Error raised by credential store adapters.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A unique constraint (username or email) rejected the write
    #[error("Identity already exists")]
    Conflict,

    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Coarse classification of an `AuthError`, used by the HTTP boundary to pick
/// a status code and by logs as a stable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    Validation,
    Unauthorized,
    Conflict,
    NotFound,
    StoreUnavailable,
    TokenIssuanceFailed,
    Internal,
}

impl AuthErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorKind::Validation => "validation",
            AuthErrorKind::Unauthorized => "unauthorized",
            AuthErrorKind::Conflict => "conflict",
            AuthErrorKind::NotFound => "not_found",
            AuthErrorKind::StoreUnavailable => "store_unavailable",
            AuthErrorKind::TokenIssuanceFailed => "token_issuance_failed",
            AuthErrorKind::Internal => "internal",
        }
    }
}

/// Top-level error for registration, login, refresh and profile operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Input validation
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("A user with this username or email already exists")]
    AlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    Token(TokenError),

    #[error("Refresh token has been superseded")]
    TokenSuperseded,

    // Infrastructure errors
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuanceFailed(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::MissingField(_) | AuthError::InvalidEmail(_) => AuthErrorKind::Validation,
            AuthError::InvalidCredentials | AuthError::Token(_) | AuthError::TokenSuperseded => {
                AuthErrorKind::Unauthorized
            }
            AuthError::AlreadyExists => AuthErrorKind::Conflict,
            AuthError::UserNotFound => AuthErrorKind::NotFound,
            AuthError::StoreUnavailable(_) => AuthErrorKind::StoreUnavailable,
            AuthError::TokenIssuanceFailed(_) => AuthErrorKind::TokenIssuanceFailed,
            AuthError::PasswordHashing(_) => AuthErrorKind::Internal,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => AuthError::AlreadyExists,
            StoreError::Unavailable(msg) => AuthError::StoreUnavailable(msg),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::EncodingFailed(msg) => AuthError::TokenIssuanceFailed(msg),
            other => AuthError::Token(other),
        }
    }
}
