use crate::domain::errors::DomainResult;
use crate::domain::ids::SubmissionId;
use crate::domain::publication::NewPublication;
use crate::domain::submission::entity::{NewSubmission, Submission};
use async_trait::async_trait;

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn get(&self, id: SubmissionId) -> DomainResult<Option<Submission>>;
    /// Stores the submission together with its first publication, which becomes current.
    async fn add(
        &self,
        submission: NewSubmission,
        publication: NewPublication,
    ) -> DomainResult<Submission>;
    async fn edit(&self, submission: &Submission) -> DomainResult<Submission>;
    /// Removes the submission and everything it owns.
    async fn delete(&self, id: SubmissionId) -> DomainResult<()>;
}
