use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::note::models::Note;

pub mod create_note;
pub mod delete_all_notes;
pub mod delete_completed_notes;
pub mod delete_note;
pub mod list_notes;
pub mod mark_completed;
pub mod update_note;

pub use create_note::create_note;
pub use delete_all_notes::delete_all_notes;
pub use delete_completed_notes::delete_completed_notes;
pub use delete_note::delete_note;
pub use list_notes::list_notes;
pub use mark_completed::mark_completed;
pub use update_note::update_note;

/// Request body carrying note text, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteTextRequest {
    #[serde(default)]
    note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteData {
    pub id: i64,
    pub note: String,
    pub completed: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Note> for NoteData {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.as_i64(),
            note: note.note.clone(),
            completed: note.completed,
            user_id: note.user_id.as_i64(),
            created_at: note.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedData {
    pub deleted: u64,
}
