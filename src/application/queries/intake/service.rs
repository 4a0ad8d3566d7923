use std::sync::Arc;

use crate::domain::{
    catalog::{CategoryRepository, SeriesRepository},
    doi::DoiSettingsRepository,
    publication::PublicationRepository,
    submission::SubmissionRepository,
    user::UserGroupRepository,
};

pub struct IntakeQueryService {
    pub(super) submissions: Arc<dyn SubmissionRepository>,
    pub(super) publications: Arc<dyn PublicationRepository>,
    pub(super) series: Arc<dyn SeriesRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) doi_settings: Arc<dyn DoiSettingsRepository>,
    pub(super) user_groups: Arc<dyn UserGroupRepository>,
}

impl IntakeQueryService {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        publications: Arc<dyn PublicationRepository>,
        series: Arc<dyn SeriesRepository>,
        categories: Arc<dyn CategoryRepository>,
        doi_settings: Arc<dyn DoiSettingsRepository>,
        user_groups: Arc<dyn UserGroupRepository>,
    ) -> Self {
        Self {
            submissions,
            publications,
            series,
            categories,
            doi_settings,
            user_groups,
        }
    }
}
