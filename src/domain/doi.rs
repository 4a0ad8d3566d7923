// src/domain/doi.rs
use crate::domain::errors::DomainResult;
use crate::domain::ids::{ChapterId, PressId, SubmissionId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// How the unique part of a DOI is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuffixStrategy {
    /// The suffix stored on each object is used verbatim.
    CustomId,
    /// A per-object-kind template with `%p %x %m %c` tokens.
    Pattern,
    #[default]
    Default,
}

impl SuffixStrategy {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("customId") => Self::CustomId,
            Some("pattern") => Self::Pattern,
            _ => Self::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoiObjectKind {
    Publication,
    Chapter,
}

/// DOI configuration of a press.
#[derive(Debug, Clone, Default)]
pub struct DoiSettings {
    pub prefix: Option<String>,
    pub enable_publication_doi: bool,
    pub enable_chapter_doi: bool,
    pub suffix_strategy: SuffixStrategy,
    pub publication_suffix_pattern: Option<String>,
    pub chapter_suffix_pattern: Option<String>,
}

impl DoiSettings {
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn publication_doi_available(&self) -> bool {
        self.prefix().is_some() && self.enable_publication_doi
    }

    pub fn chapter_doi_available(&self) -> bool {
        self.prefix().is_some() && self.enable_chapter_doi
    }

    pub fn pattern_for(&self, kind: DoiObjectKind) -> Option<&str> {
        match kind {
            DoiObjectKind::Publication => self.publication_suffix_pattern.as_deref(),
            DoiObjectKind::Chapter => self.chapter_suffix_pattern.as_deref(),
        }
    }
}

/// The object a DOI is being minted for.
#[derive(Debug, Clone, Copy)]
pub struct DoiTarget<'a> {
    pub kind: DoiObjectKind,
    pub stored_suffix: Option<&'a str>,
    pub publisher_id: Option<&'a str>,
}

/// Everything outside the target object that a suffix may reference.
#[derive(Debug, Clone, Copy)]
pub struct SuffixContext<'a> {
    pub acronym: &'a str,
    pub submission_id: Option<SubmissionId>,
    pub chapter_id: Option<ChapterId>,
}

/// Derives the DOI suffix for one object.
///
/// Returns `None` only for the custom-id strategy when the object carries no
/// stored suffix. Tokens of a pattern without a value are left in place.
pub fn doi_suffix(
    settings: &DoiSettings,
    target: DoiTarget<'_>,
    ctx: SuffixContext<'_>,
) -> Option<String> {
    let acronym = ctx.acronym.to_lowercase();
    match settings.suffix_strategy {
        SuffixStrategy::CustomId => target
            .stored_suffix
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
        SuffixStrategy::Pattern => {
            let mut suffix = settings.pattern_for(target.kind).unwrap_or_default().to_string();
            suffix = suffix.replace("%p", &acronym);
            if let Some(publisher_id) = target.publisher_id.filter(|id| !id.is_empty()) {
                suffix = suffix.replace("%x", publisher_id);
            }
            if let Some(submission_id) = ctx.submission_id {
                suffix = suffix.replace("%m", &submission_id.to_string());
            }
            if let Some(chapter_id) = ctx.chapter_id {
                suffix = suffix.replace("%c", &format!("c{chapter_id}"));
            }
            Some(suffix)
        }
        SuffixStrategy::Default => {
            let mut suffix = acronym;
            if let Some(submission_id) = ctx.submission_id {
                suffix.push_str(&format!(".{submission_id}"));
            }
            if let Some(chapter_id) = ctx.chapter_id {
                suffix.push_str(&format!(".c{chapter_id}"));
            }
            Some(suffix)
        }
    }
}

pub fn construct_doi(prefix: &str, suffix: &str) -> String {
    format!("{}/{}", prefix.trim(), suffix)
}

#[async_trait]
pub trait DoiSettingsRepository: Send + Sync {
    async fn for_press(&self, press_id: PressId) -> DomainResult<DoiSettings>;
}
