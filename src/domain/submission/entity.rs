// src/domain/submission/entity.rs
use crate::domain::ids::{PressId, SeriesId, SubmissionId};
use crate::domain::locale::Locale;
use crate::domain::submission::value_objects::{SubmissionStatus, WorkType, WorkflowStage};
use chrono::{DateTime, Utc};

/// Progress marker stored on a submission that has not finished the wizard.
pub const PROGRESS_START: &str = "start";

#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub press_id: PressId,
    pub status: SubmissionStatus,
    pub stage: WorkflowStage,
    pub progress: Option<String>,
    pub locale: Locale,
    pub series_id: Option<SeriesId>,
    pub work_type: WorkType,
    pub date_submitted: Option<DateTime<Utc>>,
    pub date_status_modified: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl Submission {
    pub fn belongs_to(&self, press_id: PressId) -> bool {
        self.press_id == press_id
    }

    /// Moves the submission out of the intake wizard and into production.
    pub fn complete_intake(&mut self, locale: Locale, work_type: WorkType, now: DateTime<Utc>) {
        self.locale = locale;
        self.work_type = work_type;
        self.stage = WorkflowStage::Production;
        self.date_submitted = Some(now);
        self.progress = None;
        self.last_modified = now;
    }

    pub fn set_status(&mut self, status: SubmissionStatus, now: DateTime<Utc>) {
        if self.status != status {
            self.status = status;
            self.date_status_modified = now;
        }
        self.last_modified = now;
    }
}

/// A submission that has not been stored yet; created together with its first publication.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub press_id: PressId,
    pub locale: Locale,
    pub series_id: Option<SeriesId>,
    pub created_at: DateTime<Utc>,
}

impl NewSubmission {
    pub fn status(&self) -> SubmissionStatus {
        SubmissionStatus::Queued
    }

    pub fn stage(&self) -> WorkflowStage {
        WorkflowStage::Submission
    }

    pub fn progress(&self) -> &'static str {
        PROGRESS_START
    }
}
