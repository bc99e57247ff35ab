use chrono::DateTime;
use chrono::Utc;

use crate::domain::identity::models::UserId;
use crate::domain::note::errors::NoteError;
use crate::domain::sanitize;

/// Minimum note length, counted in characters after trimming and escaping.
pub const MIN_NOTE_CHARS: usize = 3;

/// A note owned by exactly one identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub note: String,
    pub completed: bool,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Note unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(i64);

impl NoteId {
    /// # Errors
    /// * `InvalidId` - Identifiers start at 1
    pub fn new(id: i64) -> Result<Self, NoteError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(NoteError::InvalidId(id))
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Note text that passed trimming, escaping and the length rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteText(String);

impl NoteText {
    pub fn new(raw: &str) -> Result<Self, NoteError> {
        let cleaned = sanitize::clean(raw);

        if cleaned.chars().count() < MIN_NOTE_CHARS {
            return Err(NoteError::TooShort {
                min: MIN_NOTE_CHARS,
            });
        }

        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
