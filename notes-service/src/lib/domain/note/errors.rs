use thiserror::Error;

/// Note operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("Note is too short: minimum {min} characters")]
    TooShort { min: usize },

    #[error("Note ID must be positive, got {0}")]
    InvalidId(i64),

    #[error("Note not found")]
    NotFound,

    #[error("Note store unavailable: {0}")]
    StoreUnavailable(String),
}
