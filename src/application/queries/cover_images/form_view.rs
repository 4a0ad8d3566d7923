use std::sync::Arc;

use crate::{
    application::{
        dto::{CoverImageDto, CoverImageFormViewDto, LinkActionDto},
        error::ApplicationResult,
        ports::storage::PublicFileStore,
        queries::links::cover_image_url,
        scope::{
            RequestScope, ensure_editorial_access, load_current_publication,
            load_owned_submission,
        },
    },
    domain::{
        ids::SubmissionId, publication::PublicationRepository, submission::SubmissionRepository,
        user::UserGroupRepository,
    },
};

pub struct CoverImageFormViewQuery {
    pub submission_id: i64,
    pub locale: Option<String>,
}

pub struct CoverImageQueryService {
    submissions: Arc<dyn SubmissionRepository>,
    publications: Arc<dyn PublicationRepository>,
    user_groups: Arc<dyn UserGroupRepository>,
    public_files: Arc<dyn PublicFileStore>,
}

impl CoverImageQueryService {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        publications: Arc<dyn PublicationRepository>,
        user_groups: Arc<dyn UserGroupRepository>,
        public_files: Arc<dyn PublicFileStore>,
    ) -> Self {
        Self {
            submissions,
            publications,
            user_groups,
            public_files,
        }
    }

    /// Current cover image of the locale and, when one exists, the action
    /// that deletes it.
    pub async fn form_view(
        &self,
        scope: &RequestScope,
        query: CoverImageFormViewQuery,
    ) -> ApplicationResult<CoverImageFormViewDto> {
        ensure_editorial_access(self.user_groups.as_ref(), scope).await?;
        let id = SubmissionId::new(query.submission_id)?;
        let submission = load_owned_submission(self.submissions.as_ref(), scope, id).await?;
        let publication = load_current_publication(self.publications.as_ref(), &submission).await?;
        let locale = scope.form_locale(query.locale.as_deref())?;

        let cover = publication
            .cover_image
            .resolve(&locale, &scope.press.primary_locale)
            .cloned();

        let delete_action = cover.as_ref().map(|cover| LinkActionDto {
            id: "deleteCoverImage".into(),
            title: "common.delete".into(),
            url: cover_image_url(
                &scope.press.path,
                submission.id,
                &[("coverImage", cover.upload_name.clone())],
            ),
            modal: "modal_delete".into(),
        });

        Ok(CoverImageFormViewDto {
            submission_id: submission.id.into(),
            publication_id: publication.id.into(),
            locale: locale.to_string(),
            image_alt_text: cover.as_ref().map(|c| c.alt_text.clone()).unwrap_or_default(),
            cover_image_name: cover
                .as_ref()
                .map(|c| c.upload_name.clone())
                .unwrap_or_default(),
            cover_image: cover.map(|c| CoverImageDto {
                url: self.public_files.press_file_url(scope.press.id, &c.upload_name),
                upload_name: c.upload_name,
                alt_text: c.alt_text,
            }),
            delete_cover_image_link_action: delete_action,
        })
    }
}
