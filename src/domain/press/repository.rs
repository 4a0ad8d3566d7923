use crate::domain::errors::DomainResult;
use crate::domain::ids::PressId;
use crate::domain::press::entity::Press;
use async_trait::async_trait;

#[async_trait]
pub trait PressRepository: Send + Sync {
    async fn find_by_id(&self, id: PressId) -> DomainResult<Option<Press>>;
    async fn find_by_path(&self, path: &str) -> DomainResult<Option<Press>>;
}
