use crate::domain::errors::DomainResult;
use crate::domain::ids::{CategoryId, PublicationId, SubmissionId};
use crate::domain::publication::author::{Author, NewAuthor};
use crate::domain::publication::chapter::Chapter;
use crate::domain::publication::entity::Publication;
use async_trait::async_trait;
use std::collections::BTreeSet;

#[async_trait]
pub trait PublicationRepository: Send + Sync {
    async fn get(&self, id: PublicationId) -> DomainResult<Option<Publication>>;
    /// Latest version of the submission's publications.
    async fn current_for_submission(
        &self,
        submission_id: SubmissionId,
    ) -> DomainResult<Option<Publication>>;
    /// Persists scalar and localized fields. Categories and authors are
    /// written by their dedicated replace operations.
    async fn edit(&self, publication: &Publication) -> DomainResult<Publication>;
    /// Drops every category assignment of the publication, then inserts `categories`.
    async fn replace_categories(
        &self,
        id: PublicationId,
        categories: &BTreeSet<CategoryId>,
    ) -> DomainResult<()>;
    async fn replace_authors(
        &self,
        id: PublicationId,
        authors: Vec<NewAuthor>,
    ) -> DomainResult<Vec<Author>>;
}

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn list_by_publication(&self, publication_id: PublicationId) -> DomainResult<Vec<Chapter>>;
    async fn edit(&self, chapter: &Chapter) -> DomainResult<Chapter>;
}
