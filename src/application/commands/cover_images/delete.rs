use super::CoverImageService;
use crate::{
    application::{
        dto::JsonMessage,
        error::ApplicationResult,
        scope::{
            RequestScope, ensure_editorial_access, load_current_publication,
            load_owned_submission,
        },
        validation::{Validator, non_blank},
    },
    domain::ids::SubmissionId,
};

#[derive(Debug, Clone, Default)]
pub struct DeleteCoverImageCommand {
    pub submission_id: Option<i64>,
    pub cover_image: Option<String>,
}

impl CoverImageService {
    /// Removes the cover image of every locale and deletes the named public
    /// file. Only a file the publication currently uses as its cover is touched.
    pub async fn delete(
        &self,
        scope: &RequestScope,
        command: DeleteCoverImageCommand,
    ) -> ApplicationResult<JsonMessage> {
        ensure_editorial_access(self.user_groups.as_ref(), scope).await?;
        Validator::<DeleteCoverImageCommand>::new()
            .rule("coverImage", "editor.article.coverImageRequired", |c| {
                non_blank(&c.cover_image).is_some()
            })
            .rule("submissionId", "submission.submissionIdRequired", |c| {
                c.submission_id.is_some_and(|id| id > 0)
            })
            .validate(&command)?;

        let file_name = non_blank(&command.cover_image).unwrap_or_default().to_string();
        let id = SubmissionId::new(command.submission_id.unwrap_or_default())?;
        let submission = load_owned_submission(self.submissions.as_ref(), scope, id).await?;
        let mut publication =
            load_current_publication(self.publications.as_ref(), &submission).await?;

        let is_current = publication
            .cover_image
            .iter()
            .any(|(_, cover)| cover.upload_name == file_name);
        if !is_current {
            tracing::warn!(submission_id = %submission.id, file = %file_name, "cover image to delete is not used by the publication");
            return Ok(JsonMessage::failure(
                "editor.article.removeCoverImageFileNotFound",
            ));
        }

        publication.clear_cover_image();
        publication.last_modified = self.clock.now();
        self.publications.edit(&publication).await?;

        if self
            .public_files
            .remove_press_file(scope.press.id, &file_name)
            .await?
        {
            tracing::info!(submission_id = %submission.id, file = %file_name, "cover image deleted");
            Ok(JsonMessage::event(JsonMessage::FILE_DELETED))
        } else {
            tracing::warn!(submission_id = %submission.id, file = %file_name, "cover image file was already gone");
            Ok(JsonMessage::failure("editor.article.removeCoverImageFileNotFound"))
        }
    }
}
