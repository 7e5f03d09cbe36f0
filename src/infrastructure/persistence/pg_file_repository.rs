use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{FileRepository, RepositoryError};
use crate::domain::{FileId, StoragePath, UploadedFile, UserId};

use super::pg_pool::query_failed;

pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FileRow {
    id: Uuid,
    user_id: Uuid,
    filename: String,
    storage_path: String,
    file_type: String,
    size_bytes: i64,
    uploaded_at: DateTime<Utc>,
}

impl From<FileRow> for UploadedFile {
    fn from(r: FileRow) -> Self {
        Self {
            id: FileId::from_uuid(r.id),
            user_id: UserId::from_uuid(r.user_id),
            filename: r.filename,
            storage_path: StoragePath::from_raw(r.storage_path),
            file_type: r.file_type,
            size_bytes: r.size_bytes.max(0) as u64,
            uploaded_at: r.uploaded_at,
        }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    #[instrument(skip(self, file), fields(file_id = %file.id, user_id = %file.user_id))]
    async fn insert_file(&self, file: &UploadedFile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO files (id, user_id, filename, storage_path, file_type, size_bytes, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(file.id.as_uuid())
        .bind(file.user_id.as_uuid())
        .bind(&file.filename)
        .bind(file.storage_path.as_str())
        .bind(&file.file_type)
        .bind(i64::try_from(file.size_bytes).unwrap_or(i64::MAX))
        .bind(file.uploaded_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn list_files(&self, user_id: UserId) -> Result<Vec<UploadedFile>, RepositoryError> {
        let rows = sqlx::query_as::<_, FileRow>(
            r#"
            SELECT id, user_id, filename, storage_path, file_type, size_bytes, uploaded_at
            FROM files
            WHERE user_id = $1
            ORDER BY uploaded_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(rows.into_iter().map(UploadedFile::from).collect())
    }

    #[instrument(skip(self), fields(user_id = %user_id, file_id = %file_id))]
    async fn get_file(
        &self,
        user_id: UserId,
        file_id: FileId,
    ) -> Result<Option<UploadedFile>, RepositoryError> {
        let row = sqlx::query_as::<_, FileRow>(
            r#"
            SELECT id, user_id, filename, storage_path, file_type, size_bytes, uploaded_at
            FROM files
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(file_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(row.map(UploadedFile::from))
    }

    #[instrument(skip(self), fields(user_id = %user_id, file_id = %file_id))]
    async fn delete_file(&self, user_id: UserId, file_id: FileId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1 AND user_id = $2")
            .bind(file_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }
}
