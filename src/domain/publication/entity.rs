// src/domain/publication/entity.rs
use crate::domain::ids::{CategoryId, PublicationId, SeriesId, SubmissionId};
use crate::domain::locale::{Locale, Localized};
use crate::domain::publication::author::Author;
use crate::domain::publication::cover_image::CoverImage;
use crate::domain::submission::SubmissionStatus;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

pub type PublicationStatus = SubmissionStatus;

/// One versioned metadata snapshot of a submission.
#[derive(Debug, Clone)]
pub struct Publication {
    pub id: PublicationId,
    pub submission_id: SubmissionId,
    pub version: i32,
    pub status: PublicationStatus,
    pub locale: Locale,
    pub language: String,
    pub series_id: Option<SeriesId>,
    pub category_ids: BTreeSet<CategoryId>,
    pub title: Localized<String>,
    pub subtitle: Localized<String>,
    pub abstract_text: Localized<String>,
    pub keywords: Localized<Vec<String>>,
    pub authors: Vec<Author>,
    pub license_url: Option<String>,
    pub copyright_holder: Localized<String>,
    pub copyright_year: Option<i32>,
    pub cover_image: Localized<CoverImage>,
    pub doi_suffix: Option<String>,
    pub publisher_id: Option<String>,
    pub doi: Option<String>,
    pub date_published: Option<NaiveDate>,
    pub last_modified: DateTime<Utc>,
}

impl Publication {
    pub fn set_locale(&mut self, locale: Locale) {
        self.language = locale.language().to_string();
        self.locale = locale;
    }

    pub fn is_published(&self) -> bool {
        self.status == PublicationStatus::Published
    }

    pub fn publish(&mut self, date_published: NaiveDate, now: DateTime<Utc>) {
        self.date_published = Some(date_published);
        self.status = PublicationStatus::Published;
        self.last_modified = now;
    }

    pub fn has_cover_image(&self) -> bool {
        !self.cover_image.is_empty()
    }

    pub fn set_cover_image(&mut self, locale: Locale, cover: CoverImage) {
        self.cover_image.set(locale, cover);
    }

    /// Updates the alt text of the locale's cover image; `false` when that
    /// locale has no image.
    pub fn set_cover_alt_text(&mut self, locale: &Locale, alt_text: impl Into<String>) -> bool {
        match self.cover_image.get_mut(locale) {
            Some(cover) => {
                cover.alt_text = alt_text.into();
                true
            }
            None => false,
        }
    }

    pub fn clear_cover_image(&mut self) {
        self.cover_image.clear();
    }
}

/// First publication of a freshly created submission.
#[derive(Debug, Clone)]
pub struct NewPublication {
    pub locale: Locale,
    pub series_id: Option<SeriesId>,
    pub created_at: DateTime<Utc>,
}

impl NewPublication {
    pub const FIRST_VERSION: i32 = 1;

    pub fn language(&self) -> &str {
        self.locale.language()
    }

    pub fn status(&self) -> PublicationStatus {
        PublicationStatus::Queued
    }
}
