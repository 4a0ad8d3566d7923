// src/domain/press/entity.rs
use crate::domain::ids::PressId;
use crate::domain::locale::{Locale, Localized};
use crate::domain::press::value_objects::{CopyrightHolderType, MetadataField, MetadataRequirement};
use std::collections::BTreeMap;

/// The publishing venue that scopes submissions, series, categories and files.
#[derive(Debug, Clone)]
pub struct Press {
    pub id: PressId,
    pub path: String,
    pub primary_locale: Locale,
    pub supported_submission_locales: Vec<Locale>,
    pub acronym: Localized<String>,
    pub name: Localized<String>,
    pub license_url: Option<String>,
    pub copyright_holder_type: Option<CopyrightHolderType>,
    pub copyright_holder_other: Localized<String>,
    pub metadata: BTreeMap<MetadataField, MetadataRequirement>,
}

impl Press {
    /// Locales a submission may be written in; the primary locale when the
    /// press has not configured any.
    pub fn submission_locales(&self) -> Vec<Locale> {
        if self.supported_submission_locales.is_empty() {
            vec![self.primary_locale.clone()]
        } else {
            self.supported_submission_locales.clone()
        }
    }

    pub fn accepts_submission_locale(&self, locale: &Locale) -> bool {
        self.submission_locales().iter().any(|l| l == locale)
    }

    /// Acronym in the primary locale; roots generated DOI suffixes.
    pub fn primary_acronym(&self) -> String {
        self.acronym
            .resolve_text(&self.primary_locale, &self.primary_locale)
            .unwrap_or_default()
            .to_string()
    }

    pub fn localized_name(&self, locale: &Locale) -> String {
        self.name
            .resolve_text(locale, &self.primary_locale)
            .unwrap_or(&self.path)
            .to_string()
    }

    pub fn metadata_requirement(&self, field: MetadataField) -> MetadataRequirement {
        self.metadata.get(&field).copied().unwrap_or_default()
    }

    /// Copyright holder suggested when a new submission form is opened.
    pub fn default_copyright_holder(&self, locale: &Locale) -> Option<String> {
        match self.copyright_holder_type? {
            // authors are not known yet; the submitter fills the holder in
            CopyrightHolderType::Author => None,
            CopyrightHolderType::Context => Some(self.localized_name(locale)),
            CopyrightHolderType::Other => self
                .copyright_holder_other
                .resolve_text(locale, &self.primary_locale)
                .map(str::to_string),
        }
    }
}
