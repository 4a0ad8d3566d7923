use std::sync::Arc;

use crate::{
    application::ports::{
        storage::{PublicFileStore, TemporaryFileStore},
        time::Clock,
    },
    domain::{
        publication::PublicationRepository, submission::SubmissionRepository,
        temporary_file::TemporaryFileRepository, user::UserGroupRepository,
    },
};

/// Stages uploads and attaches them to publications as cover images.
pub struct CoverImageService {
    pub(super) submissions: Arc<dyn SubmissionRepository>,
    pub(super) publications: Arc<dyn PublicationRepository>,
    pub(super) user_groups: Arc<dyn UserGroupRepository>,
    pub(super) temporary_files: Arc<dyn TemporaryFileRepository>,
    pub(super) public_files: Arc<dyn PublicFileStore>,
    pub(super) temporary_store: Arc<dyn TemporaryFileStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CoverImageService {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        publications: Arc<dyn PublicationRepository>,
        user_groups: Arc<dyn UserGroupRepository>,
        temporary_files: Arc<dyn TemporaryFileRepository>,
        public_files: Arc<dyn PublicFileStore>,
        temporary_store: Arc<dyn TemporaryFileStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            submissions,
            publications,
            user_groups,
            temporary_files,
            public_files,
            temporary_store,
            clock,
        }
    }
}
