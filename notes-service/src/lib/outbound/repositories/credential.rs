use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::identity::errors::StoreError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::UserId;
use crate::domain::identity::ports::CredentialStore;

pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct IdentityRow {
    id: i64,
    user_name: String,
    email: String,
    password_hash: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = StoreError;

    fn try_from(row: IdentityRow) -> Result<Self, Self::Error> {
        Ok(Identity {
            id: UserId::new(row.id).map_err(|e| StoreError::Unavailable(e.to_string()))?,
            username: row.user_name,
            email: row.email,
            password_hash: row.password_hash,
            refresh_token: row.refresh_token,
            created_at: row.created_at,
        })
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Identity>, StoreError> {
        sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, user_name, email, password_hash, refresh_token, created_at
            FROM users
            WHERE user_name = $1 OR email = $2
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?
        .map(Identity::try_from)
        .transpose()
    }

    async fn create(&self, identity: NewIdentity) -> Result<Identity, StoreError> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            INSERT INTO users (user_name, email, password_hash, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, user_name, email, password_hash, refresh_token, created_at
            "#,
        )
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StoreError::Conflict;
                }
            }
            unavailable(e)
        })?;

        Identity::try_from(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, user_name, email, password_hash, refresh_token, created_at
            FROM users
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?
        .map(Identity::try_from)
        .transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<Identity>, StoreError> {
        sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, user_name, email, password_hash, refresh_token, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?
        .map(Identity::try_from)
        .transpose()
    }

    async fn update_refresh_token(&self, id: UserId, token: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE users
            SET refresh_token = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(())
    }

    async fn replace_refresh_token(
        &self,
        id: UserId,
        expected: &str,
        new_token: &str,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET refresh_token = $3
            WHERE id = $1 AND refresh_token = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(expected)
        .bind(new_token)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(result.rows_affected() == 1)
    }
}
