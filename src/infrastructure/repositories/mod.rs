// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_catalog;
mod postgres_chapter;
mod postgres_press;
mod postgres_publication;
mod postgres_submission;
mod postgres_temporary_file;
mod postgres_user_group;

pub use error::map_sqlx;
pub use postgres_catalog::{PostgresCategoryRepository, PostgresSeriesRepository};
pub use postgres_chapter::PostgresChapterRepository;
pub use postgres_press::{PostgresDoiSettingsRepository, PostgresPressRepository};
pub use postgres_publication::PostgresPublicationRepository;
pub use postgres_submission::PostgresSubmissionRepository;
pub use postgres_temporary_file::PostgresTemporaryFileRepository;
pub use postgres_user_group::{PostgresStageAssignmentRepository, PostgresUserGroupRepository};
