// src/infrastructure/repositories/postgres_press.rs
use super::map_sqlx;
use crate::domain::doi::{DoiSettings, DoiSettingsRepository, SuffixStrategy};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::PressId;
use crate::domain::locale::{Locale, Localized};
use crate::domain::press::{MetadataField, MetadataRequirement, Press, PressRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};
use std::collections::BTreeMap;

#[derive(Clone)]
pub struct PostgresPressRepository {
    pool: PgPool,
}

impl PostgresPressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PressRow {
    id: i64,
    path: String,
    primary_locale: String,
    supported_submission_locales: Vec<String>,
    acronym: Json<Localized<String>>,
    name: Json<Localized<String>>,
    license_url: Option<String>,
    copyright_holder_type: Option<String>,
    copyright_holder_other: Json<Localized<String>>,
    metadata: Json<BTreeMap<MetadataField, MetadataRequirement>>,
}

impl TryFrom<PressRow> for Press {
    type Error = DomainError;

    fn try_from(row: PressRow) -> Result<Self, Self::Error> {
        Ok(Press {
            id: PressId::new(row.id)?,
            path: row.path,
            primary_locale: Locale::new(row.primary_locale)?,
            supported_submission_locales: row
                .supported_submission_locales
                .into_iter()
                .map(Locale::new)
                .collect::<DomainResult<_>>()?,
            acronym: row.acronym.0,
            name: row.name.0,
            license_url: row.license_url.filter(|u| !u.is_empty()),
            copyright_holder_type: row
                .copyright_holder_type
                .filter(|t| !t.is_empty())
                .map(|t| t.parse())
                .transpose()?,
            copyright_holder_other: row.copyright_holder_other.0,
            metadata: row.metadata.0,
        })
    }
}

const PRESS_COLUMNS: &str = "id, path, primary_locale, supported_submission_locales, acronym, name, \
     license_url, copyright_holder_type, copyright_holder_other, metadata";

#[async_trait]
impl PressRepository for PostgresPressRepository {
    async fn find_by_id(&self, id: PressId) -> DomainResult<Option<Press>> {
        let row = sqlx::query_as::<_, PressRow>(&format!(
            "SELECT {PRESS_COLUMNS} FROM presses WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Press::try_from).transpose()
    }

    async fn find_by_path(&self, path: &str) -> DomainResult<Option<Press>> {
        let row = sqlx::query_as::<_, PressRow>(&format!(
            "SELECT {PRESS_COLUMNS} FROM presses WHERE path = $1"
        ))
        .bind(path)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Press::try_from).transpose()
    }
}

#[derive(Clone)]
pub struct PostgresDoiSettingsRepository {
    pool: PgPool,
}

impl PostgresDoiSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DoiSettingsRow {
    prefix: Option<String>,
    enable_publication_doi: bool,
    enable_chapter_doi: bool,
    suffix_strategy: Option<String>,
    publication_suffix_pattern: Option<String>,
    chapter_suffix_pattern: Option<String>,
}

impl From<DoiSettingsRow> for DoiSettings {
    fn from(row: DoiSettingsRow) -> Self {
        DoiSettings {
            prefix: row.prefix,
            enable_publication_doi: row.enable_publication_doi,
            enable_chapter_doi: row.enable_chapter_doi,
            suffix_strategy: SuffixStrategy::parse(row.suffix_strategy.as_deref()),
            publication_suffix_pattern: row.publication_suffix_pattern,
            chapter_suffix_pattern: row.chapter_suffix_pattern,
        }
    }
}

#[async_trait]
impl DoiSettingsRepository for PostgresDoiSettingsRepository {
    /// Presses without a settings row get DOIs disabled.
    async fn for_press(&self, press_id: PressId) -> DomainResult<DoiSettings> {
        let row = sqlx::query_as::<_, DoiSettingsRow>(
            "SELECT prefix, enable_publication_doi, enable_chapter_doi, suffix_strategy,
                    publication_suffix_pattern, chapter_suffix_pattern
             FROM doi_settings WHERE press_id = $1",
        )
        .bind(i64::from(press_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into).unwrap_or_default())
    }
}
