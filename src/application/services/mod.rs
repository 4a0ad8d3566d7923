// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{cover_images::CoverImageService, intake::SubmissionIntakeService},
        ports::{
            search::SubmissionSearchIndex,
            security::{CsrfTokens, TokenManager},
            storage::{PublicFileStore, TemporaryFileStore},
            time::Clock,
        },
        queries::{cover_images::CoverImageQueryService, intake::IntakeQueryService},
    },
    domain::{
        catalog::{CategoryRepository, SeriesRepository},
        doi::DoiSettingsRepository,
        press::PressRepository,
        publication::{ChapterRepository, PublicationRepository},
        submission::SubmissionRepository,
        temporary_file::TemporaryFileRepository,
        user::{StageAssignmentRepository, UserGroupRepository},
    },
};

/// Repository ports the services are assembled from.
#[derive(Clone)]
pub struct Repositories {
    pub presses: Arc<dyn PressRepository>,
    pub submissions: Arc<dyn SubmissionRepository>,
    pub publications: Arc<dyn PublicationRepository>,
    pub chapters: Arc<dyn ChapterRepository>,
    pub series: Arc<dyn SeriesRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub user_groups: Arc<dyn UserGroupRepository>,
    pub stage_assignments: Arc<dyn StageAssignmentRepository>,
    pub temporary_files: Arc<dyn TemporaryFileRepository>,
    pub doi_settings: Arc<dyn DoiSettingsRepository>,
}

/// Adapters behind the non-repository ports.
#[derive(Clone)]
pub struct Adapters {
    pub token_manager: Arc<dyn TokenManager>,
    pub csrf_tokens: Arc<dyn CsrfTokens>,
    pub public_files: Arc<dyn PublicFileStore>,
    pub temporary_store: Arc<dyn TemporaryFileStore>,
    pub search_index: Arc<dyn SubmissionSearchIndex>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub intake_commands: Arc<SubmissionIntakeService>,
    pub cover_image_commands: Arc<CoverImageService>,
    pub intake_queries: Arc<IntakeQueryService>,
    pub cover_image_queries: Arc<CoverImageQueryService>,
    token_manager: Arc<dyn TokenManager>,
    csrf_tokens: Arc<dyn CsrfTokens>,
    press_repo: Arc<dyn PressRepository>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters) -> Self {
        let intake_commands = Arc::new(SubmissionIntakeService::new(
            Arc::clone(&repos.submissions),
            Arc::clone(&repos.publications),
            Arc::clone(&repos.chapters),
            Arc::clone(&repos.series),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.user_groups),
            Arc::clone(&repos.stage_assignments),
            Arc::clone(&repos.doi_settings),
            Arc::clone(&adapters.search_index),
            Arc::clone(&adapters.csrf_tokens),
            Arc::clone(&adapters.clock),
        ));

        let cover_image_commands = Arc::new(CoverImageService::new(
            Arc::clone(&repos.submissions),
            Arc::clone(&repos.publications),
            Arc::clone(&repos.user_groups),
            Arc::clone(&repos.temporary_files),
            Arc::clone(&adapters.public_files),
            Arc::clone(&adapters.temporary_store),
            Arc::clone(&adapters.clock),
        ));

        let intake_queries = Arc::new(IntakeQueryService::new(
            Arc::clone(&repos.submissions),
            Arc::clone(&repos.publications),
            Arc::clone(&repos.series),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.doi_settings),
            Arc::clone(&repos.user_groups),
        ));

        let cover_image_queries = Arc::new(CoverImageQueryService::new(
            Arc::clone(&repos.submissions),
            Arc::clone(&repos.publications),
            Arc::clone(&repos.user_groups),
            Arc::clone(&adapters.public_files),
        ));

        Self {
            intake_commands,
            cover_image_commands,
            intake_queries,
            cover_image_queries,
            token_manager: adapters.token_manager,
            csrf_tokens: adapters.csrf_tokens,
            press_repo: repos.presses,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn csrf_tokens(&self) -> Arc<dyn CsrfTokens> {
        Arc::clone(&self.csrf_tokens)
    }

    pub fn press_repo(&self) -> Arc<dyn PressRepository> {
        Arc::clone(&self.press_repo)
    }
}
