use crate::domain::ids::SubmissionId;
use crate::domain::locale::Locale;
use serde::{Deserialize, Serialize};

/// Cover image of one locale: the public file name and its alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    pub upload_name: String,
    #[serde(default)]
    pub alt_text: String,
}

/// Extension (with the leading dot) for a supported image MIME type.
pub fn image_extension(mime_type: &str) -> Option<&'static str> {
    match mime_type.trim().to_ascii_lowercase().as_str() {
        "image/gif" => Some(".gif"),
        "image/jpeg" | "image/pjpeg" => Some(".jpg"),
        "image/png" | "image/x-png" => Some(".png"),
        "image/vnd.microsoft.icon" | "image/x-icon" | "image/x-ico" | "image/ico" => Some(".ico"),
        "image/svg+xml" | "image/svg" => Some(".svg"),
        "image/webp" => Some(".webp"),
        _ => None,
    }
}

pub fn cover_image_file_name(submission_id: SubmissionId, locale: &Locale, extension: &str) -> String {
    format!("book_{submission_id}_cover_{locale}{extension}")
}
