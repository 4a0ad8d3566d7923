use serde::{Deserialize, Serialize};

/// Success-or-message reply of the AJAX style file actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonMessage {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

impl JsonMessage {
    pub const DATA_CHANGED: &'static str = "dataChanged";
    pub const FILE_DELETED: &'static str = "fileDeleted";

    pub fn event(event: impl Into<String>) -> Self {
        Self {
            status: true,
            content: None,
            event: Some(event.into()),
        }
    }

    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            status: false,
            content: Some(content.into()),
            event: None,
        }
    }
}
