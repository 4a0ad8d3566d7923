use super::CoverImageService;
use crate::{
    application::{
        dto::JsonMessage,
        error::{ApplicationError, ApplicationResult},
        scope::{
            RequestScope, ensure_editorial_access, load_current_publication,
            load_owned_submission,
        },
        validation::{FormErrors, Validator, non_blank},
    },
    domain::{
        ids::{SubmissionId, TemporaryFileId},
        publication::{CoverImage, cover_image_file_name, image_extension},
        temporary_file::TemporaryFile,
    },
};

#[derive(Debug, Clone, Default)]
pub struct SaveCoverImageCommand {
    pub submission_id: i64,
    pub locale: Option<String>,
    pub temporary_file_id: Option<i64>,
    pub image_alt_text: Option<String>,
}

impl CoverImageService {
    /// Attaches a staged upload as the locale's cover image, or only updates
    /// the alt text when no upload is given and an image already exists.
    pub async fn save(
        &self,
        scope: &RequestScope,
        command: SaveCoverImageCommand,
    ) -> ApplicationResult<JsonMessage> {
        ensure_editorial_access(self.user_groups.as_ref(), scope).await?;
        let id = SubmissionId::new(command.submission_id)?;
        let submission = load_owned_submission(self.submissions.as_ref(), scope, id).await?;
        let mut publication =
            load_current_publication(self.publications.as_ref(), &submission).await?;

        let has_cover = publication.has_cover_image();
        Validator::<SaveCoverImageCommand>::new()
            .rule("temporaryFileId", "manager.website.imageFileRequired", move |c| {
                has_cover || c.temporary_file_id.is_some_and(|id| id > 0)
            })
            .validate(&command)?;

        let locale = scope.form_locale(command.locale.as_deref())?;
        let alt_text = non_blank(&command.image_alt_text)
            .unwrap_or_default()
            .to_string();
        let now = self.clock.now();

        if let Some(temporary_file_id) = command.temporary_file_id.filter(|id| *id > 0) {
            // a posted id must resolve to an upload of the acting user
            let file = self
                .fetch_temporary_file(scope, temporary_file_id)
                .await?
                .ok_or_else(|| {
                    ApplicationError::InvalidForm(FormErrors::single(
                        "temporaryFileId",
                        "manager.website.imageFileRequired",
                    ))
                })?;
            let Some(extension) = image_extension(&file.file_type) else {
                tracing::info!(temporary_file_id = %file.id, file_type = %file.file_type, "rejected cover image of unsupported type");
                return Ok(JsonMessage::failure("common.uploadFailed"));
            };
            let file_name = cover_image_file_name(submission.id, &locale, extension);
            self.public_files
                .copy_press_file(scope.press.id, &file.file_path, &file_name)
                .await?;

            publication.set_cover_image(
                locale.clone(),
                CoverImage {
                    upload_name: file_name.clone(),
                    alt_text,
                },
            );
            publication.last_modified = now;
            self.publications.edit(&publication).await?;
            self.discard_temporary_file(scope, &file).await?;

            tracing::info!(submission_id = %submission.id, locale = %locale, file = %file_name, "cover image saved");
            return Ok(JsonMessage::event(JsonMessage::DATA_CHANGED));
        }

        // no upload posted, so validation guarantees an existing image
        if !publication.set_cover_alt_text(&locale, alt_text.clone()) {
            // another locale holds the image; start this locale's entry from it
            let existing = publication.cover_image.iter().next().map(|(_, c)| c.clone());
            if let Some(existing) = existing {
                publication.set_cover_image(
                    locale.clone(),
                    CoverImage {
                        upload_name: existing.upload_name,
                        alt_text,
                    },
                );
            }
        }
        publication.last_modified = now;
        self.publications.edit(&publication).await?;
        tracing::debug!(submission_id = %submission.id, locale = %locale, "cover image alt text updated");
        Ok(JsonMessage::event(JsonMessage::DATA_CHANGED))
    }

    async fn fetch_temporary_file(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> ApplicationResult<Option<TemporaryFile>> {
        let id = TemporaryFileId::new(id)?;
        Ok(self.temporary_files.find_for_user(id, scope.user.id).await?)
    }

    async fn discard_temporary_file(
        &self,
        scope: &RequestScope,
        file: &TemporaryFile,
    ) -> ApplicationResult<()> {
        self.temporary_files.delete(file.id, scope.user.id).await?;
        if let Err(err) = self.temporary_store.remove(&file.file_path).await {
            tracing::warn!(path = %file.file_path, error = %err, "temporary file bytes not removed");
        }
        Ok(())
    }
}
