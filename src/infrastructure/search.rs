// src/infrastructure/search.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::search::SubmissionSearchIndex,
};
use crate::domain::{publication::Publication, submission::Submission};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

/// Keeps a `tsvector` per submission in `submission_search_objects`.
#[derive(Clone)]
pub struct PostgresSearchIndex {
    pool: PgPool,
}

impl PostgresSearchIndex {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn document_text(submission: &Submission, publication: &Publication) -> String {
    let locale = &submission.locale;
    let primary = &publication.locale;
    let mut parts: Vec<String> = Vec::new();
    for field in [&publication.title, &publication.subtitle, &publication.abstract_text] {
        if let Some(text) = field.resolve_text(locale, primary) {
            parts.push(text.to_string());
        }
    }
    if let Some(keywords) = publication.keywords.resolve(locale, primary) {
        parts.extend(keywords.iter().cloned());
    }
    parts.extend(
        publication
            .authors
            .iter()
            .map(|author| author.full_name(locale, primary)),
    );
    parts.join(" ")
}

fn index_error(err: sqlx::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("search index: {err}"))
}

#[async_trait]
impl SubmissionSearchIndex for PostgresSearchIndex {
    async fn submission_metadata_changed(
        &self,
        submission: &Submission,
        publication: &Publication,
    ) -> ApplicationResult<()> {
        sqlx::query(
            "INSERT INTO submission_search_objects (submission_id, document, indexed_at)
             VALUES ($1, to_tsvector('simple', $2), $3)
             ON CONFLICT (submission_id)
             DO UPDATE SET document = EXCLUDED.document, indexed_at = EXCLUDED.indexed_at",
        )
        .bind(i64::from(submission.id))
        .bind(document_text(submission, publication))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(index_error)?;
        Ok(())
    }

    async fn submission_files_changed(&self, submission: &Submission) -> ApplicationResult<()> {
        sqlx::query(
            "UPDATE submission_search_objects SET files_changed_at = $2 WHERE submission_id = $1",
        )
        .bind(i64::from(submission.id))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(index_error)?;
        Ok(())
    }

    async fn submission_changes_finished(&self) -> ApplicationResult<()> {
        // every write above is committed on its own
        Ok(())
    }
}
