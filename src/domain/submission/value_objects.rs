use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Queued,
    Published,
    Declined,
    Scheduled,
}

impl SubmissionStatus {
    pub fn code(&self) -> i16 {
        match self {
            Self::Queued => 1,
            Self::Published => 3,
            Self::Declined => 4,
            Self::Scheduled => 5,
        }
    }

    pub fn from_code(code: i16) -> DomainResult<Self> {
        match code {
            1 => Ok(Self::Queued),
            3 => Ok(Self::Published),
            4 => Ok(Self::Declined),
            5 => Ok(Self::Scheduled),
            other => Err(DomainError::Validation(format!(
                "unknown submission status {other}"
            ))),
        }
    }
}

/// Workflow phase a submission occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    Submission,
    InternalReview,
    ExternalReview,
    Editing,
    Production,
}

impl WorkflowStage {
    pub fn code(&self) -> i16 {
        match self {
            Self::Submission => 1,
            Self::InternalReview => 2,
            Self::ExternalReview => 3,
            Self::Editing => 4,
            Self::Production => 5,
        }
    }

    pub fn from_code(code: i16) -> DomainResult<Self> {
        match code {
            1 => Ok(Self::Submission),
            2 => Ok(Self::InternalReview),
            3 => Ok(Self::ExternalReview),
            4 => Ok(Self::Editing),
            5 => Ok(Self::Production),
            other => Err(DomainError::Validation(format!(
                "unknown workflow stage {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    EditedVolume,
    #[default]
    AuthoredWork,
}

impl WorkType {
    pub fn code(&self) -> i16 {
        match self {
            Self::EditedVolume => 1,
            Self::AuthoredWork => 2,
        }
    }

    pub fn from_code(code: i16) -> DomainResult<Self> {
        match code {
            1 => Ok(Self::EditedVolume),
            2 => Ok(Self::AuthoredWork),
            other => Err(DomainError::Validation(format!("unknown work type {other}"))),
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EditedVolume => f.write_str("edited_volume"),
            Self::AuthoredWork => f.write_str("authored_work"),
        }
    }
}
