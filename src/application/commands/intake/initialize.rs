// src/application/commands/intake/initialize.rs
use super::SubmissionIntakeService;
use crate::{
    application::{
        dto::IntakeFormDataDto,
        error::{ApplicationError, ApplicationResult},
        scope::{
            RequestScope, ensure_editorial_access, load_current_publication,
            load_owned_submission,
        },
    },
    domain::{
        ids::{SeriesId, SubmissionId},
        locale::Locale,
        publication::NewPublication,
        submission::NewSubmission,
        user::Role,
    },
};
use chrono::Datelike;

pub struct InitializeIntakeCommand {
    pub submission_id: Option<i64>,
    pub locale: Option<String>,
    pub series_id: Option<i64>,
}

impl SubmissionIntakeService {
    /// Opens the form: creates a draft submission when no id is given,
    /// otherwise refreshes the existing draft's locale and series.
    pub async fn initialize(
        &self,
        scope: &RequestScope,
        command: InitializeIntakeCommand,
    ) -> ApplicationResult<IntakeFormDataDto> {
        let locale = scope.form_locale(command.locale.as_deref())?;
        match command.submission_id.filter(|id| *id > 0) {
            Some(id) => {
                let series_id = command
                    .series_id
                    .filter(|id| *id > 0)
                    .map(SeriesId::new)
                    .transpose()?;
                self.touch_draft(scope, SubmissionId::new(id)?, locale, series_id)
                    .await
            }
            None => self.create_draft(scope, locale).await,
        }
    }

    async fn create_draft(
        &self,
        scope: &RequestScope,
        locale: Locale,
    ) -> ApplicationResult<IntakeFormDataDto> {
        let press = &scope.press;
        let manager_group = self
            .user_groups
            .first_for_user_with_role(scope.user.id, press.id, Role::Manager)
            .await?
            .ok_or_else(|| {
                ApplicationError::forbidden("acting user holds no manager role in this press")
            })?;

        let series_id = self
            .series
            .list_by_press(press.id)
            .await?
            .first()
            .map(|series| series.id);
        let now = self.clock.now();

        let submission = self
            .submissions
            .add(
                NewSubmission {
                    press_id: press.id,
                    locale: locale.clone(),
                    series_id,
                    created_at: now,
                },
                NewPublication {
                    locale: locale.clone(),
                    series_id,
                    created_at: now,
                },
            )
            .await?;
        let publication = load_current_publication(self.publications.as_ref(), &submission).await?;

        self.stage_assignments
            .assign(submission.id, manager_group.id, scope.user.id)
            .await?;

        tracing::info!(
            submission_id = %submission.id,
            press = %press.path,
            user_id = %scope.user.id,
            "draft submission created"
        );

        Ok(IntakeFormDataDto {
            submission_id: submission.id.into(),
            publication_id: publication.id.into(),
            locale: locale.to_string(),
            series_id: series_id.map(Into::into),
            license_url: press.license_url.clone(),
            copyright_holder: press.default_copyright_holder(&locale),
            copyright_year: Some(now.year()),
        })
    }

    async fn touch_draft(
        &self,
        scope: &RequestScope,
        id: SubmissionId,
        locale: Locale,
        series_id: Option<SeriesId>,
    ) -> ApplicationResult<IntakeFormDataDto> {
        ensure_editorial_access(self.user_groups.as_ref(), scope).await?;
        let mut submission = load_owned_submission(self.submissions.as_ref(), scope, id).await?;
        let mut publication =
            load_current_publication(self.publications.as_ref(), &submission).await?;
        let now = self.clock.now();

        submission.locale = locale.clone();
        if let Some(series_id) = series_id {
            submission.series_id = Some(series_id);
        }
        submission.last_modified = now;
        publication.set_locale(locale.clone());
        publication.last_modified = now;

        // persisted right away so collaborators see the half-filled draft
        let submission = self.submissions.edit(&submission).await?;
        let publication = self.publications.edit(&publication).await?;

        tracing::debug!(submission_id = %submission.id, locale = %locale, "draft submission refreshed");

        Ok(IntakeFormDataDto {
            submission_id: submission.id.into(),
            publication_id: publication.id.into(),
            locale: locale.to_string(),
            series_id: submission.series_id.map(Into::into),
            license_url: publication.license_url.clone(),
            copyright_holder: publication.copyright_holder.get(&locale).cloned(),
            copyright_year: publication.copyright_year,
        })
    }
}
