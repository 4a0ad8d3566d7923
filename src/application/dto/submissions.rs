use crate::domain::locale::Localized;
use crate::domain::publication::{CoverImage, Publication};
use crate::domain::submission::{Submission, SubmissionStatus, WorkType, WorkflowStage};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationDto {
    pub id: i64,
    pub version: i32,
    pub status: SubmissionStatus,
    pub locale: String,
    pub series_id: Option<i64>,
    pub category_ids: Vec<i64>,
    pub title: Localized<String>,
    pub license_url: Option<String>,
    pub copyright_holder: Localized<String>,
    pub copyright_year: Option<i32>,
    pub cover_image: Localized<CoverImage>,
    pub doi: Option<String>,
    pub date_published: Option<NaiveDate>,
}

impl From<Publication> for PublicationDto {
    fn from(publication: Publication) -> Self {
        Self {
            id: publication.id.into(),
            version: publication.version,
            status: publication.status,
            locale: publication.locale.to_string(),
            series_id: publication.series_id.map(Into::into),
            category_ids: publication.category_ids.into_iter().map(Into::into).collect(),
            title: publication.title,
            license_url: publication.license_url,
            copyright_holder: publication.copyright_holder,
            copyright_year: publication.copyright_year,
            cover_image: publication.cover_image,
            doi: publication.doi,
            date_published: publication.date_published,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionDto {
    pub id: i64,
    pub press_id: i64,
    pub status: SubmissionStatus,
    pub stage: WorkflowStage,
    pub locale: String,
    pub series_id: Option<i64>,
    pub work_type: WorkType,
    pub date_submitted: Option<DateTime<Utc>>,
    pub publication: PublicationDto,
}

impl SubmissionDto {
    pub fn new(submission: Submission, publication: Publication) -> Self {
        Self {
            id: submission.id.into(),
            press_id: submission.press_id.into(),
            status: submission.status,
            stage: submission.stage,
            locale: submission.locale.to_string(),
            series_id: submission.series_id.map(Into::into),
            work_type: submission.work_type,
            date_submitted: submission.date_submitted,
            publication: publication.into(),
        }
    }
}
