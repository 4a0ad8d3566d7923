// src/application/commands/intake/submit.rs
use std::collections::BTreeSet;

use super::{MetadataInput, SubmissionIntakeService, metadata::metadata_rules};
use crate::{
    application::{
        dto::SubmissionDto,
        error::ApplicationResult,
        scope::{
            RequestScope, ensure_editorial_access, load_current_publication,
            load_owned_submission,
        },
        validation::{Validator, is_valid_url, non_blank},
    },
    domain::{
        ids::{CategoryId, SeriesId, SubmissionId},
        locale::Locale,
        press::CopyrightHolderType,
        publication::Publication,
        submission::{Submission, SubmissionStatus, WorkType},
    },
};
use chrono::{Datelike, NaiveDate};

/// How the form reached the server; checked before anything else.
#[derive(Debug, Clone, Default)]
pub struct FormEnvelope {
    pub is_post: bool,
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SubmitIntakeCommand {
    pub submission_id: i64,
    pub locale: String,
    pub series_id: Option<i64>,
    pub date_published: Option<NaiveDate>,
    pub license_url: Option<String>,
    pub copyright_holder_type: Option<String>,
    pub copyright_holder: Option<String>,
    pub copyright_year: Option<i32>,
    pub categories: Vec<i64>,
    pub work_type: Option<WorkType>,
    /// Publish right away instead of leaving the submission queued.
    pub publish_now: bool,
    pub assign_publication_doi: bool,
    pub assign_chapter_doi: bool,
    pub metadata: MetadataInput,
    pub form: FormEnvelope,
}

impl SubmissionIntakeService {
    pub fn validate(
        &self,
        scope: &RequestScope,
        command: &SubmitIntakeCommand,
    ) -> ApplicationResult<()> {
        let csrf = self.csrf_tokens.clone();
        let user_id = scope.user.id;
        let locales: Vec<String> = scope
            .press
            .submission_locales()
            .into_iter()
            .map(|l| l.to_string())
            .collect();

        let validator = Validator::<SubmitIntakeCommand>::new()
            .rule("form", "form.postRequired", |c| c.form.is_post)
            .rule("form", "form.csrfInvalid", move |c| {
                c.form
                    .csrf_token
                    .as_deref()
                    .map(|token| csrf.verify(user_id, token))
                    .unwrap_or(false)
            })
            .rule("locale", "submission.submit.form.localeRequired", move |c| {
                locales.iter().any(|l| *l == c.locale.trim())
            })
            .rule("licenseUrl", "form.url.invalid", |c| {
                non_blank(&c.license_url).map(is_valid_url).unwrap_or(true)
            })
            .rule(
                "copyrightHolderType",
                "submission.copyrightHolderType.invalid",
                |c| {
                    non_blank(&c.copyright_holder_type)
                        .map(|t| t.parse::<CopyrightHolderType>().is_ok())
                        .unwrap_or(true)
                },
            )
            .rule(
                "copyrightHolder",
                "submission.copyrightHolder.otherRequired",
                |c| {
                    let other = non_blank(&c.copyright_holder_type)
                        .and_then(|t| t.parse::<CopyrightHolderType>().ok())
                        == Some(CopyrightHolderType::Other);
                    !other || non_blank(&c.copyright_holder).is_some()
                },
            );

        metadata_rules(validator, &scope.press).validate(command)?;
        Ok(())
    }

    /// Completes the intake: applies every section of the form, moves the
    /// submission to production and optionally publishes it.
    pub async fn submit(
        &self,
        scope: &RequestScope,
        command: SubmitIntakeCommand,
    ) -> ApplicationResult<SubmissionDto> {
        ensure_editorial_access(self.user_groups.as_ref(), scope).await?;
        self.validate(scope, &command)?;

        let locale = Locale::new(command.locale.trim())?;
        let id = SubmissionId::new(command.submission_id)?;
        let mut submission = load_owned_submission(self.submissions.as_ref(), scope, id).await?;
        let mut publication =
            load_current_publication(self.publications.as_ref(), &submission).await?;
        let now = self.clock.now();

        self.apply_metadata(&mut publication, &locale, command.metadata)
            .await?;

        let series_id = self
            .resolve_series(scope, &submission, command.series_id)
            .await?;
        let work_type = command.work_type.unwrap_or(submission.work_type);
        submission.complete_intake(locale.clone(), work_type, now);
        submission.series_id = series_id;
        let mut submission = self.submissions.edit(&submission).await?;

        publication.set_locale(locale.clone());
        publication.copyright_year = command
            .date_published
            .map(|date| date.year())
            .or(command.copyright_year);

        let holder_type = non_blank(&command.copyright_holder_type)
            .and_then(|t| t.parse().ok())
            .or(scope.press.copyright_holder_type);
        let holder = self
            .resolve_copyright_holder(
                scope,
                &publication,
                &locale,
                holder_type,
                non_blank(&command.copyright_holder),
            )
            .await?;
        match holder {
            Some(text) => publication.copyright_holder.set(locale.clone(), text),
            None => {
                publication.copyright_holder.remove(&locale);
            }
        }
        publication.license_url = non_blank(&command.license_url).map(str::to_string);

        publication.series_id = series_id;

        if command.assign_publication_doi || command.assign_chapter_doi {
            self.assign_dois(
                scope,
                &submission,
                &mut publication,
                command.assign_publication_doi,
                command.assign_chapter_doi,
            )
            .await?;
        }

        let categories = self.press_categories(scope, &command.categories).await?;
        self.publications
            .replace_categories(publication.id, &categories)
            .await?;
        publication.category_ids = categories;

        if command.publish_now {
            let date = command.date_published.unwrap_or_else(|| now.date_naive());
            publication.publish(date, now);
            submission.set_status(SubmissionStatus::Published, now);
            submission = self.submissions.edit(&submission).await?;
        }

        publication.last_modified = now;
        let publication = self.publications.edit(&publication).await?;

        self.notify_search_index(&submission, &publication).await;

        tracing::info!(
            submission_id = %submission.id,
            press = %scope.press.path,
            published = publication.is_published(),
            "submission intake completed"
        );

        Ok(SubmissionDto::new(submission, publication))
    }

    /// Posted series when it belongs to the press. No id or an unknown id
    /// keeps the current series; `0` clears it.
    async fn resolve_series(
        &self,
        scope: &RequestScope,
        submission: &Submission,
        requested: Option<i64>,
    ) -> ApplicationResult<Option<SeriesId>> {
        let requested = match requested {
            None => return Ok(submission.series_id),
            Some(0) => return Ok(None),
            Some(id) => id,
        };
        let series = self.series.list_by_press(scope.press.id).await?;
        Ok(series
            .iter()
            .find(|s| i64::from(s.id) == requested)
            .map(|s| s.id)
            .or(submission.series_id))
    }

    async fn press_categories(
        &self,
        scope: &RequestScope,
        requested: &[i64],
    ) -> ApplicationResult<BTreeSet<CategoryId>> {
        if requested.is_empty() {
            return Ok(BTreeSet::new());
        }
        let known = self.categories.list_by_press(scope.press.id).await?;
        Ok(known
            .into_iter()
            .map(|category| category.id)
            .filter(|id| requested.contains(&i64::from(*id)))
            .collect())
    }

    async fn notify_search_index(&self, submission: &Submission, publication: &Publication) {
        if let Err(err) = self
            .search_index
            .submission_metadata_changed(submission, publication)
            .await
        {
            tracing::warn!(submission_id = %submission.id, error = %err, "search index metadata update failed");
        }
        if let Err(err) = self.search_index.submission_files_changed(submission).await {
            tracing::warn!(submission_id = %submission.id, error = %err, "search index file update failed");
        }
        if let Err(err) = self.search_index.submission_changes_finished().await {
            tracing::warn!(error = %err, "search index flush failed");
        }
    }
}
