use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::{UserId, UserProfile, UserStats};

use super::pg_pool::query_failed;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    business_name: String,
    specialization: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for UserProfile {
    fn from(r: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(r.id),
            username: r.username,
            business_name: r.business_name,
            specialization: r.specialization,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create_user(&self, user: &UserProfile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, business_name, specialization, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.username)
        .bind(&user.business_name)
        .bind(&user.specialization)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::ConstraintViolation(format!(
                    "username {} already exists",
                    user.username
                ))
            }
            other => query_failed(other),
        })?;

        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn get_user(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, business_name, specialization, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(row.map(UserProfile::from))
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn get_user_stats(&self, id: UserId) -> Result<UserStats, RepositoryError> {
        let (files_count, messages_count): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM files WHERE user_id = $1),
                (SELECT COUNT(*) FROM messages WHERE user_id = $1)
            "#,
        )
        .bind(id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(UserStats {
            files_count: files_count.max(0) as u64,
            messages_count: messages_count.max(0) as u64,
        })
    }
}
