use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::identity::models::UserId;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::NoteText;

/// Port for note operations, always on behalf of an authenticated owner.
#[async_trait]
pub trait NoteServicePort: Send + Sync + 'static {
    async fn list_notes(&self, owner: UserId) -> Result<Vec<Note>, NoteError>;

    /// # Errors
    /// * `TooShort` - Fewer than three characters after trimming
    async fn create_note(&self, owner: UserId, text: &str) -> Result<Note, NoteError>;

    /// # Errors
    /// * `InvalidId` - Non-positive id
    /// * `TooShort` - Fewer than three characters after trimming
    /// * `NotFound` - No such note for this owner
    async fn update_note(&self, owner: UserId, id: i64, text: &str) -> Result<(), NoteError>;

    async fn delete_note(&self, owner: UserId, id: i64) -> Result<(), NoteError>;

    async fn mark_completed(&self, owner: UserId, id: i64, completed: bool)
        -> Result<(), NoteError>;

    /// # Returns
    /// Number of notes removed
    ///
    /// # Errors
    /// * `NotFound` - The owner had no notes
    async fn delete_all(&self, owner: UserId) -> Result<u64, NoteError>;

    /// # Errors
    /// * `NotFound` - The owner had no completed notes
    async fn delete_completed(&self, owner: UserId) -> Result<u64, NoteError>;
}

/// Persistence operations for notes.
///
/// Every method is scoped to `owner`; a row belonging to someone else is
/// treated exactly like a missing row.
#[async_trait]
pub trait NoteStore: Send + Sync + 'static {
    /// Owner's notes, oldest first.
    async fn list(&self, owner: UserId) -> Result<Vec<Note>, NoteError>;

    async fn insert(
        &self,
        owner: UserId,
        text: &NoteText,
        created_at: DateTime<Utc>,
    ) -> Result<Note, NoteError>;

    /// # Returns
    /// `true` when a row matched
    async fn update_text(&self, owner: UserId, id: NoteId, text: &NoteText)
        -> Result<bool, NoteError>;

    async fn delete(&self, owner: UserId, id: NoteId) -> Result<bool, NoteError>;

    async fn set_completed(
        &self,
        owner: UserId,
        id: NoteId,
        completed: bool,
    ) -> Result<bool, NoteError>;

    async fn delete_all(&self, owner: UserId) -> Result<u64, NoteError>;

    async fn delete_completed(&self, owner: UserId) -> Result<u64, NoteError>;
}
