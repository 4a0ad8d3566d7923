use crate::domain::errors::DomainResult;
use crate::domain::ids::{PressId, SubmissionId, UserGroupId, UserId};
use crate::domain::user::{entity::UserGroup, value_objects::Role};
use async_trait::async_trait;

#[async_trait]
pub trait UserGroupRepository: Send + Sync {
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<UserGroup>>;

    /// First group (lowest id) with `role` that the user belongs to in the press.
    async fn first_for_user_with_role(
        &self,
        user_id: UserId,
        press_id: PressId,
        role: Role,
    ) -> DomainResult<Option<UserGroup>>;
}

#[async_trait]
pub trait StageAssignmentRepository: Send + Sync {
    async fn assign(
        &self,
        submission_id: SubmissionId,
        user_group_id: UserGroupId,
        user_id: UserId,
    ) -> DomainResult<()>;
}
