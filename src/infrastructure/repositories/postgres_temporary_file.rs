use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{TemporaryFileId, UserId};
use crate::domain::temporary_file::{NewTemporaryFile, TemporaryFile, TemporaryFileRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTemporaryFileRepository {
    pool: PgPool,
}

impl PostgresTemporaryFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TemporaryFileRow {
    id: i64,
    user_id: i64,
    file_path: String,
    original_file_name: String,
    file_type: String,
    file_size: i64,
    date_uploaded: DateTime<Utc>,
}

impl TryFrom<TemporaryFileRow> for TemporaryFile {
    type Error = DomainError;

    fn try_from(row: TemporaryFileRow) -> Result<Self, Self::Error> {
        Ok(TemporaryFile {
            id: TemporaryFileId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            file_path: row.file_path,
            original_file_name: row.original_file_name,
            file_type: row.file_type,
            file_size: row.file_size,
            date_uploaded: row.date_uploaded,
        })
    }
}

#[async_trait]
impl TemporaryFileRepository for PostgresTemporaryFileRepository {
    async fn insert(&self, file: NewTemporaryFile) -> DomainResult<TemporaryFile> {
        let NewTemporaryFile {
            user_id,
            file_path,
            original_file_name,
            file_type,
            file_size,
            date_uploaded,
        } = file;

        let row = sqlx::query_as::<_, TemporaryFileRow>(
            "INSERT INTO temporary_files (user_id, file_path, original_file_name, file_type, file_size, date_uploaded)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, user_id, file_path, original_file_name, file_type, file_size, date_uploaded",
        )
        .bind(i64::from(user_id))
        .bind(file_path)
        .bind(original_file_name)
        .bind(file_type)
        .bind(file_size)
        .bind(date_uploaded)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        TemporaryFile::try_from(row)
    }

    async fn find_for_user(
        &self,
        id: TemporaryFileId,
        user_id: UserId,
    ) -> DomainResult<Option<TemporaryFile>> {
        let row = sqlx::query_as::<_, TemporaryFileRow>(
            "SELECT id, user_id, file_path, original_file_name, file_type, file_size, date_uploaded
             FROM temporary_files WHERE id = $1 AND user_id = $2",
        )
        .bind(i64::from(id))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(TemporaryFile::try_from).transpose()
    }

    async fn delete(&self, id: TemporaryFileId, user_id: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM temporary_files WHERE id = $1 AND user_id = $2")
            .bind(i64::from(id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
