use thiserror::Error;

/// Rule an email address failed, in the order the rules are checked.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("email must contain an '@' character")]
    MissingAt,

    #[error("email must not start or end with '@'")]
    MisplacedAt,

    #[error("email does not match the local@domain.tld format")]
    InvalidFormat,
}
