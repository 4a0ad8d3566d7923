use crate::domain::ids::{TemporaryFileId, UserId};
use chrono::{DateTime, Utc};

/// A user's staged upload that no permanent entity references yet.
#[derive(Debug, Clone)]
pub struct TemporaryFile {
    pub id: TemporaryFileId,
    pub user_id: UserId,
    pub file_path: String,
    pub original_file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub date_uploaded: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTemporaryFile {
    pub user_id: UserId,
    pub file_path: String,
    pub original_file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub date_uploaded: DateTime<Utc>,
}
