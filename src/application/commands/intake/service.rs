// src/application/commands/intake/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{search::SubmissionSearchIndex, security::CsrfTokens, time::Clock},
    domain::{
        catalog::{CategoryRepository, SeriesRepository},
        doi::DoiSettingsRepository,
        publication::{ChapterRepository, PublicationRepository},
        submission::SubmissionRepository,
        user::{StageAssignmentRepository, UserGroupRepository},
    },
};

/// Creates, completes and discards submissions entered through the one-page form.
pub struct SubmissionIntakeService {
    pub(super) submissions: Arc<dyn SubmissionRepository>,
    pub(super) publications: Arc<dyn PublicationRepository>,
    pub(super) chapters: Arc<dyn ChapterRepository>,
    pub(super) series: Arc<dyn SeriesRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) user_groups: Arc<dyn UserGroupRepository>,
    pub(super) stage_assignments: Arc<dyn StageAssignmentRepository>,
    pub(super) doi_settings: Arc<dyn DoiSettingsRepository>,
    pub(super) search_index: Arc<dyn SubmissionSearchIndex>,
    pub(super) csrf_tokens: Arc<dyn CsrfTokens>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubmissionIntakeService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        publications: Arc<dyn PublicationRepository>,
        chapters: Arc<dyn ChapterRepository>,
        series: Arc<dyn SeriesRepository>,
        categories: Arc<dyn CategoryRepository>,
        user_groups: Arc<dyn UserGroupRepository>,
        stage_assignments: Arc<dyn StageAssignmentRepository>,
        doi_settings: Arc<dyn DoiSettingsRepository>,
        search_index: Arc<dyn SubmissionSearchIndex>,
        csrf_tokens: Arc<dyn CsrfTokens>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            submissions,
            publications,
            chapters,
            series,
            categories,
            user_groups,
            stage_assignments,
            doi_settings,
            search_index,
            csrf_tokens,
            clock,
        }
    }
}
