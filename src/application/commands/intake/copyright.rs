use super::SubmissionIntakeService;
use crate::{
    application::{error::ApplicationResult, scope::RequestScope},
    domain::{
        ids::UserGroupId,
        locale::Locale,
        press::CopyrightHolderType,
        publication::{Publication, author_string},
    },
};

impl SubmissionIntakeService {
    /// Copyright holder text for the chosen holder type, `None` when nothing
    /// applies.
    pub(super) async fn resolve_copyright_holder(
        &self,
        scope: &RequestScope,
        publication: &Publication,
        locale: &Locale,
        holder_type: Option<CopyrightHolderType>,
        free_text: Option<&str>,
    ) -> ApplicationResult<Option<String>> {
        match holder_type {
            Some(CopyrightHolderType::Author) => {
                let credited: Vec<UserGroupId> = self
                    .user_groups
                    .list_by_press(scope.press.id)
                    .await?
                    .into_iter()
                    .filter(|group| group.role.is_credited())
                    .map(|group| group.id)
                    .collect();
                let names = author_string(
                    &publication.authors,
                    &credited,
                    locale,
                    &scope.press.primary_locale,
                );
                Ok(Some(names).filter(|n| !n.is_empty()))
            }
            Some(CopyrightHolderType::Context) => Ok(Some(scope.press.localized_name(locale))),
            Some(CopyrightHolderType::Other) | None => Ok(free_text.map(str::to_string)),
        }
    }
}
