// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::ids::{PressId, UserId};
use async_trait::async_trait;

/// Publicly served files of a press, addressed by file name.
#[async_trait]
pub trait PublicFileStore: Send + Sync {
    async fn copy_press_file(
        &self,
        press_id: PressId,
        source_path: &str,
        file_name: &str,
    ) -> ApplicationResult<()>;

    /// `Ok(false)` when there was no such file.
    async fn remove_press_file(&self, press_id: PressId, file_name: &str) -> ApplicationResult<bool>;

    fn press_file_url(&self, press_id: PressId, file_name: &str) -> String;
}

/// Staging area for uploads that are not yet attached to anything.
#[async_trait]
pub trait TemporaryFileStore: Send + Sync {
    /// Writes the bytes and returns the path they were stored under.
    async fn store(&self, user_id: UserId, bytes: &[u8]) -> ApplicationResult<String>;
    async fn remove(&self, path: &str) -> ApplicationResult<()>;
}
