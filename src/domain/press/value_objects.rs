use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Who holds the copyright of works published by a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyrightHolderType {
    Author,
    Context,
    Other,
}

impl CopyrightHolderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Context => "context",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CopyrightHolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CopyrightHolderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(Self::Author),
            // older forms posted the press name choice as "press"
            "context" | "press" => Ok(Self::Context),
            "other" => Ok(Self::Other),
            other => Err(DomainError::Validation(format!(
                "unknown copyright holder type '{other}'"
            ))),
        }
    }
}

/// Optional submission metadata fields a press can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetadataField {
    Coverage,
    Languages,
    Rights,
    Source,
    Subjects,
    Type,
    Disciplines,
    Keywords,
    Agencies,
    Citations,
}

impl MetadataField {
    pub const ALL: [MetadataField; 10] = [
        Self::Coverage,
        Self::Languages,
        Self::Rights,
        Self::Source,
        Self::Subjects,
        Self::Type,
        Self::Disciplines,
        Self::Keywords,
        Self::Agencies,
        Self::Citations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coverage => "coverage",
            Self::Languages => "languages",
            Self::Rights => "rights",
            Self::Source => "source",
            Self::Subjects => "subjects",
            Self::Type => "type",
            Self::Disciplines => "disciplines",
            Self::Keywords => "keywords",
            Self::Agencies => "agencies",
            Self::Citations => "citations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataRequirement {
    #[default]
    Disable,
    Enable,
    Request,
    Require,
}

impl MetadataRequirement {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disable)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Require)
    }
}
