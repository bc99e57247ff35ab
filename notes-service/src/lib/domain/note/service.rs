use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::models::UserId;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::NoteText;
use crate::domain::note::ports::NoteServicePort;
use crate::domain::note::ports::NoteStore;

/// Domain service implementation for notes.
pub struct NoteService<NS>
where
    NS: NoteStore,
{
    store: Arc<NS>,
}

impl<NS> NoteService<NS>
where
    NS: NoteStore,
{
    pub fn new(store: Arc<NS>) -> Self {
        Self { store }
    }
}

fn found(matched: bool) -> Result<(), NoteError> {
    if matched {
        Ok(())
    } else {
        Err(NoteError::NotFound)
    }
}

fn removed_any(count: u64) -> Result<u64, NoteError> {
    if count == 0 {
        Err(NoteError::NotFound)
    } else {
        Ok(count)
    }
}

#[async_trait]
impl<NS> NoteServicePort for NoteService<NS>
where
    NS: NoteStore,
{
    async fn list_notes(&self, owner: UserId) -> Result<Vec<Note>, NoteError> {
        self.store.list(owner).await
    }

    async fn create_note(&self, owner: UserId, text: &str) -> Result<Note, NoteError> {
        let text = NoteText::new(text)?;
        let note = self.store.insert(owner, &text, Utc::now()).await?;

        tracing::debug!(user_id = %owner, note_id = note.id.as_i64(), "Note created");

        Ok(note)
    }

    async fn update_note(&self, owner: UserId, id: i64, text: &str) -> Result<(), NoteError> {
        let id = NoteId::new(id)?;
        let text = NoteText::new(text)?;

        found(self.store.update_text(owner, id, &text).await?)
    }

    async fn delete_note(&self, owner: UserId, id: i64) -> Result<(), NoteError> {
        let id = NoteId::new(id)?;

        found(self.store.delete(owner, id).await?)
    }

    async fn mark_completed(
        &self,
        owner: UserId,
        id: i64,
        completed: bool,
    ) -> Result<(), NoteError> {
        let id = NoteId::new(id)?;

        found(self.store.set_completed(owner, id, completed).await?)
    }

    async fn delete_all(&self, owner: UserId) -> Result<u64, NoteError> {
        let count = removed_any(self.store.delete_all(owner).await?)?;
        tracing::debug!(user_id = %owner, count, "Notes deleted");
        Ok(count)
    }

    async fn delete_completed(&self, owner: UserId) -> Result<u64, NoteError> {
        let count = removed_any(self.store.delete_completed(owner).await?)?;
        tracing::debug!(user_id = %owner, count, "Completed notes deleted");
        Ok(count)
    }
}
