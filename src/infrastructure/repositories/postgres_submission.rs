// src/infrastructure/repositories/postgres_submission.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{PressId, SeriesId, SubmissionId};
use crate::domain::locale::Locale;
use crate::domain::publication::NewPublication;
use crate::domain::submission::{
    NewSubmission, Submission, SubmissionRepository, SubmissionStatus, WorkType, WorkflowStage,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubmissionRow {
    id: i64,
    press_id: i64,
    status: i16,
    stage: i16,
    progress: Option<String>,
    locale: String,
    series_id: Option<i64>,
    work_type: i16,
    date_submitted: Option<DateTime<Utc>>,
    date_status_modified: DateTime<Utc>,
    last_modified: DateTime<Utc>,
}

impl TryFrom<SubmissionRow> for Submission {
    type Error = DomainError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        Ok(Submission {
            id: SubmissionId::new(row.id)?,
            press_id: PressId::new(row.press_id)?,
            status: SubmissionStatus::from_code(row.status)?,
            stage: WorkflowStage::from_code(row.stage)?,
            progress: row.progress,
            locale: Locale::new(row.locale)?,
            series_id: row.series_id.map(SeriesId::new).transpose()?,
            work_type: WorkType::from_code(row.work_type)?,
            date_submitted: row.date_submitted,
            date_status_modified: row.date_status_modified,
            last_modified: row.last_modified,
        })
    }
}

const SUBMISSION_COLUMNS: &str = "id, press_id, status, stage, progress, locale, series_id, work_type, \
     date_submitted, date_status_modified, last_modified";

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn get(&self, id: SubmissionId) -> DomainResult<Option<Submission>> {
        let row = sqlx::query_as::<_, SubmissionRow>(&format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Submission::try_from).transpose()
    }

    async fn add(
        &self,
        submission: NewSubmission,
        publication: NewPublication,
    ) -> DomainResult<Submission> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, SubmissionRow>(&format!(
            "INSERT INTO submissions (press_id, status, stage, progress, locale, series_id, work_type,
                                      date_status_modified, last_modified)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {SUBMISSION_COLUMNS}"
        ))
        .bind(i64::from(submission.press_id))
        .bind(submission.status().code())
        .bind(submission.stage().code())
        .bind(submission.progress())
        .bind(submission.locale.as_str())
        .bind(submission.series_id.map(i64::from))
        .bind(WorkType::default().code())
        .bind(submission.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO publications (submission_id, version, status, locale, language, series_id, last_modified)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(row.id)
        .bind(NewPublication::FIRST_VERSION)
        .bind(publication.status().code())
        .bind(publication.locale.as_str())
        .bind(publication.language())
        .bind(publication.series_id.map(i64::from))
        .bind(publication.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Submission::try_from(row)
    }

    async fn edit(&self, submission: &Submission) -> DomainResult<Submission> {
        let row = sqlx::query_as::<_, SubmissionRow>(&format!(
            "UPDATE submissions
             SET status = $2, stage = $3, progress = $4, locale = $5, series_id = $6, work_type = $7,
                 date_submitted = $8, date_status_modified = $9, last_modified = $10
             WHERE id = $1
             RETURNING {SUBMISSION_COLUMNS}"
        ))
        .bind(i64::from(submission.id))
        .bind(submission.status.code())
        .bind(submission.stage.code())
        .bind(submission.progress.as_deref())
        .bind(submission.locale.as_str())
        .bind(submission.series_id.map(i64::from))
        .bind(submission.work_type.code())
        .bind(submission.date_submitted)
        .bind(submission.date_status_modified)
        .bind(submission.last_modified)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("submission not found".into()))?;

        Submission::try_from(row)
    }

    async fn delete(&self, id: SubmissionId) -> DomainResult<()> {
        // publications, authors, chapters and assignments go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("submission not found".into()));
        }
        Ok(())
    }
}
