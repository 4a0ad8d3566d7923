use crate::domain::errors::DomainResult;
use crate::domain::ids::{TemporaryFileId, UserId};
use crate::domain::temporary_file::entity::{NewTemporaryFile, TemporaryFile};
use async_trait::async_trait;

#[async_trait]
pub trait TemporaryFileRepository: Send + Sync {
    async fn insert(&self, file: NewTemporaryFile) -> DomainResult<TemporaryFile>;
    /// Resolves the file only when it is owned by `user_id`.
    async fn find_for_user(
        &self,
        id: TemporaryFileId,
        user_id: UserId,
    ) -> DomainResult<Option<TemporaryFile>>;
    async fn delete(&self, id: TemporaryFileId, user_id: UserId) -> DomainResult<()>;
}
