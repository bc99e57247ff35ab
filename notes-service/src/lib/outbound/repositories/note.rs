use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::identity::models::UserId;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::NoteText;
use crate::domain::note::ports::NoteStore;

pub struct PostgresNoteStore {
    pool: PgPool,
}

impl PostgresNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct NoteRow {
    id: i64,
    note: String,
    completed: bool,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<NoteRow> for Note {
    type Error = NoteError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        Ok(Note {
            id: NoteId::new(row.id)?,
            note: row.note,
            completed: row.completed,
            user_id: UserId::new(row.user_id)
                .map_err(|e| NoteError::StoreUnavailable(e.to_string()))?,
            created_at: row.created_at,
        })
    }
}

fn unavailable(e: sqlx::Error) -> NoteError {
    NoteError::StoreUnavailable(e.to_string())
}

#[async_trait]
impl NoteStore for PostgresNoteStore {
    async fn list(&self, owner: UserId) -> Result<Vec<Note>, NoteError> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, note, completed, user_id, created_at
            FROM notes
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(owner.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        rows.into_iter().map(Note::try_from).collect()
    }

    async fn insert(
        &self,
        owner: UserId,
        text: &NoteText,
        created_at: DateTime<Utc>,
    ) -> Result<Note, NoteError> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO notes (note, user_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, note, completed, user_id, created_at
            "#,
        )
        .bind(text.as_str())
        .bind(owner.as_i64())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(unavailable)?;

        Note::try_from(row)
    }

    async fn update_text(
        &self,
        owner: UserId,
        id: NoteId,
        text: &NoteText,
    ) -> Result<bool, NoteError> {
        let result = sqlx::query(
            r#"
            UPDATE notes
            SET note = $3
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .bind(text.as_str())
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, owner: UserId, id: NoteId) -> Result<bool, NoteError> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_completed(
        &self,
        owner: UserId,
        id: NoteId,
        completed: bool,
    ) -> Result<bool, NoteError> {
        let result = sqlx::query(
            r#"
            UPDATE notes
            SET completed = $3
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .bind(completed)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self, owner: UserId) -> Result<u64, NoteError> {
        let result = sqlx::query("DELETE FROM notes WHERE user_id = $1")
            .bind(owner.as_i64())
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;

        Ok(result.rows_affected())
    }

    async fn delete_completed(&self, owner: UserId) -> Result<u64, NoteError> {
        let result = sqlx::query("DELETE FROM notes WHERE user_id = $1 AND completed = TRUE")
            .bind(owner.as_i64())
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;

        Ok(result.rows_affected())
    }
}
