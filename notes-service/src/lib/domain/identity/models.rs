use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::UserIdError;
use crate::domain::sanitize;

/// Registered user record.
///
/// `id`, `username`, `email` and `password_hash` never change after creation.
/// `refresh_token` holds the only refresh token currently honored for this
/// identity; writing a new one revokes the previous one.
#[derive(Clone)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Identity to be persisted; the store assigns the id.
#[derive(Clone)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a store-assigned identifier.
    ///
    /// # Errors
    /// * `NotPositive` - Identifiers start at 1
    pub fn new(id: i64) -> Result<Self, UserIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(UserIdError::NotPositive(id))
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated registration input.
pub struct RegisterCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterCommand {
    /// Trim, require, escape and validate raw registration fields.
    ///
    /// # Errors
    /// * `MissingField` - A field is empty after trimming
    /// * `InvalidEmail` - Email fails syntax validation
    pub fn new(username: &str, email: &str, password: &str) -> Result<Self, AuthError> {
        let username = required("username", username)?;
        let email = required("email", email)?;
        let password = required("password", password)?;

        auth::email::validate(&email)?;

        Ok(Self {
            username,
            email,
            password,
        })
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Validated login input.
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    /// Trim, require, escape and validate raw login fields.
    ///
    /// # Errors
    /// * `MissingField` - A field is empty after trimming
    /// * `InvalidEmail` - Email fails syntax validation
    pub fn new(email: &str, password: &str) -> Result<Self, AuthError> {
        let email = required("email", email)?;
        let password = required("password", password)?;

        auth::email::validate(&email)?;

        Ok(Self { email, password })
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

fn required(field: &'static str, value: &str) -> Result<String, AuthError> {
    let cleaned = sanitize::clean(value);
    if cleaned.is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(cleaned)
}
