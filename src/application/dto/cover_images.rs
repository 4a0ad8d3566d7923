use super::intake::LinkActionDto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImageDto {
    pub upload_name: String,
    pub alt_text: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverImageFormViewDto {
    pub submission_id: i64,
    pub publication_id: i64,
    pub locale: String,
    pub cover_image: Option<CoverImageDto>,
    pub image_alt_text: String,
    pub cover_image_name: String,
    pub delete_cover_image_link_action: Option<LinkActionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporaryFileDto {
    pub temporary_file_id: i64,
    pub file_type: String,
    pub file_size: i64,
}
