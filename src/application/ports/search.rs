use crate::application::ApplicationResult;
use crate::domain::{publication::Publication, submission::Submission};
use async_trait::async_trait;

/// Keeps the press's search index in step with submission changes.
#[async_trait]
pub trait SubmissionSearchIndex: Send + Sync {
    async fn submission_metadata_changed(
        &self,
        submission: &Submission,
        publication: &Publication,
    ) -> ApplicationResult<()>;
    async fn submission_files_changed(&self, submission: &Submission) -> ApplicationResult<()>;
    async fn submission_changes_finished(&self) -> ApplicationResult<()>;
}
