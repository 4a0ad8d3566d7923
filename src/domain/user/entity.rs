use crate::domain::ids::{PressId, UserGroupId};
use crate::domain::locale::Localized;
use crate::domain::user::value_objects::Role;

#[derive(Debug, Clone)]
pub struct UserGroup {
    pub id: UserGroupId,
    pub press_id: PressId,
    pub role: Role,
    pub name: Localized<String>,
}
