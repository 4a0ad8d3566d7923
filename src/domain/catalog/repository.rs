use crate::domain::catalog::entity::{Category, Series};
use crate::domain::errors::DomainResult;
use crate::domain::ids::PressId;
use async_trait::async_trait;

#[async_trait]
pub trait SeriesRepository: Send + Sync {
    /// Series of the press in display order.
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<Series>>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<Category>>;
}
