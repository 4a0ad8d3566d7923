use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Editable values of the intake form as they are pre-filled for the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeFormDataDto {
    pub submission_id: i64,
    pub publication_id: i64,
    pub locale: String,
    pub series_id: Option<i64>,
    pub license_url: Option<String>,
    pub copyright_holder: Option<String>,
    pub copyright_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDto {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFieldFlagsDto {
    pub enabled: bool,
    pub required: bool,
}

/// A client-side affordance that opens `url` in a modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkActionDto {
    pub id: String,
    pub title: String,
    pub url: String,
    pub modal: String,
}

/// Everything the intake page needs besides the form values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeFormViewDto {
    pub submission_id: i64,
    pub publication_id: i64,
    pub locale: String,
    pub supported_submission_locale_names: BTreeMap<String, String>,
    pub metadata_fields: BTreeMap<String, MetadataFieldFlagsDto>,
    pub series_options: Vec<OptionDto>,
    pub categories_options: Vec<OptionDto>,
    pub assign_publication_doi: bool,
    pub assign_chapter_doi: bool,
    pub license_url: Option<String>,
    pub copyright_holder_type: Option<String>,
    pub cover_image_name: String,
    pub open_cover_image_link_action: LinkActionDto,
}
