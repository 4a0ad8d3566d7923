// src/application/commands/intake/doi.rs
use super::SubmissionIntakeService;
use crate::{
    application::{error::ApplicationResult, scope::RequestScope},
    domain::{
        doi::{DoiObjectKind, DoiTarget, SuffixContext, construct_doi, doi_suffix},
        publication::Publication,
        submission::Submission,
    },
};

impl SubmissionIntakeService {
    /// Mints DOIs for the publication and/or each of its chapters.
    pub(super) async fn assign_dois(
        &self,
        scope: &RequestScope,
        submission: &Submission,
        publication: &mut Publication,
        for_publication: bool,
        for_chapters: bool,
    ) -> ApplicationResult<()> {
        let settings = self.doi_settings.for_press(scope.press.id).await?;
        let Some(prefix) = settings.prefix().map(str::to_string) else {
            tracing::warn!(press = %scope.press.path, "DOI assignment requested without a DOI prefix");
            return Ok(());
        };
        let acronym = scope.press.primary_acronym();

        if for_publication && settings.enable_publication_doi {
            let target = DoiTarget {
                kind: DoiObjectKind::Publication,
                stored_suffix: publication.doi_suffix.as_deref(),
                publisher_id: publication.publisher_id.as_deref(),
            };
            let ctx = SuffixContext {
                acronym: &acronym,
                submission_id: Some(submission.id),
                chapter_id: None,
            };
            match doi_suffix(&settings, target, ctx) {
                Some(suffix) => publication.doi = Some(construct_doi(&prefix, &suffix)),
                None => tracing::warn!(
                    publication_id = %publication.id,
                    "publication has no custom DOI suffix; DOI not assigned"
                ),
            }
        }

        if for_chapters && settings.enable_chapter_doi {
            for mut chapter in self.chapters.list_by_publication(publication.id).await? {
                let target = DoiTarget {
                    kind: DoiObjectKind::Chapter,
                    stored_suffix: chapter.doi_suffix.as_deref(),
                    publisher_id: chapter.publisher_id.as_deref(),
                };
                let ctx = SuffixContext {
                    acronym: &acronym,
                    submission_id: Some(submission.id),
                    chapter_id: Some(chapter.id),
                };
                let Some(suffix) = doi_suffix(&settings, target, ctx) else {
                    tracing::warn!(chapter_id = %chapter.id, "chapter has no custom DOI suffix; DOI not assigned");
                    continue;
                };
                chapter.doi = Some(construct_doi(&prefix, &suffix));
                self.chapters.edit(&chapter).await?;
            }
        }

        Ok(())
    }
}
