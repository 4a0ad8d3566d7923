use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{PressId, SubmissionId, UserGroupId, UserId};
use crate::domain::locale::Localized;
use crate::domain::user::{Role, StageAssignmentRepository, UserGroup, UserGroupRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};

#[derive(Clone)]
pub struct PostgresUserGroupRepository {
    pool: PgPool,
}

impl PostgresUserGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserGroupRow {
    id: i64,
    press_id: i64,
    role_id: i64,
    name: Json<Localized<String>>,
}

impl TryFrom<UserGroupRow> for UserGroup {
    type Error = DomainError;

    fn try_from(row: UserGroupRow) -> Result<Self, Self::Error> {
        Ok(UserGroup {
            id: UserGroupId::new(row.id)?,
            press_id: PressId::new(row.press_id)?,
            role: Role::from_id(row.role_id)?,
            name: row.name.0,
        })
    }
}

#[async_trait]
impl UserGroupRepository for PostgresUserGroupRepository {
    async fn list_by_press(&self, press_id: PressId) -> DomainResult<Vec<UserGroup>> {
        let rows = sqlx::query_as::<_, UserGroupRow>(
            "SELECT id, press_id, role_id, name FROM user_groups WHERE press_id = $1 ORDER BY id",
        )
        .bind(i64::from(press_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(UserGroup::try_from).collect()
    }

    async fn first_for_user_with_role(
        &self,
        user_id: UserId,
        press_id: PressId,
        role: Role,
    ) -> DomainResult<Option<UserGroup>> {
        let row = sqlx::query_as::<_, UserGroupRow>(
            "SELECT g.id, g.press_id, g.role_id, g.name
             FROM user_groups g
             JOIN user_user_groups m ON m.user_group_id = g.id
             WHERE m.user_id = $1 AND g.press_id = $2 AND g.role_id = $3
             ORDER BY g.id
             LIMIT 1",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(press_id))
        .bind(role.id())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(UserGroup::try_from).transpose()
    }
}

#[derive(Clone)]
pub struct PostgresStageAssignmentRepository {
    pool: PgPool,
}

impl PostgresStageAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StageAssignmentRepository for PostgresStageAssignmentRepository {
    async fn assign(
        &self,
        submission_id: SubmissionId,
        user_group_id: UserGroupId,
        user_id: UserId,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO stage_assignments (submission_id, user_group_id, user_id)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT stage_assignments_unique_key DO NOTHING",
        )
        .bind(i64::from(submission_id))
        .bind(i64::from(user_group_id))
        .bind(i64::from(user_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}
