// src/infrastructure/storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{PublicFileStore, TemporaryFileStore},
};
use crate::domain::ids::{PressId, UserId};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Public files laid out as `<root>/presses/<pressId>/<file>`.
#[derive(Clone)]
pub struct LocalPublicFileStore {
    root: PathBuf,
    base_url: String,
}

impl LocalPublicFileStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn press_dir(&self, press_id: PressId) -> PathBuf {
        self.root.join("presses").join(press_id.to_string())
    }
}

/// File names come from requests; only plain names are accepted.
fn checked_file_name(file_name: &str) -> ApplicationResult<&str> {
    let trimmed = file_name.trim();
    let plain = !trimmed.is_empty()
        && trimmed != "."
        && trimmed != ".."
        && !trimmed.contains(['/', '\\', '\0']);
    if plain {
        Ok(trimmed)
    } else {
        Err(ApplicationError::validation(format!(
            "invalid file name '{file_name}'"
        )))
    }
}

#[async_trait]
impl PublicFileStore for LocalPublicFileStore {
    async fn copy_press_file(
        &self,
        press_id: PressId,
        source_path: &str,
        file_name: &str,
    ) -> ApplicationResult<()> {
        let file_name = checked_file_name(file_name)?;
        let dir = self.press_dir(press_id);
        tokio::fs::create_dir_all(&dir).await.map_err(|err| {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot create press file directory");
            ApplicationError::storage(format!("cannot create {}: {err}", dir.display()))
        })?;
        let target = dir.join(file_name);
        tokio::fs::copy(source_path, &target).await.map_err(|err| {
            tracing::warn!(source = %source_path, target = %target.display(), error = %err, "press file copy failed");
            ApplicationError::storage(format!("cannot copy to {}: {err}", target.display()))
        })?;
        Ok(())
    }

    async fn remove_press_file(&self, press_id: PressId, file_name: &str) -> ApplicationResult<bool> {
        let file_name = checked_file_name(file_name)?;
        let target = self.press_dir(press_id).join(file_name);
        match tokio::fs::remove_file(&target).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => {
                tracing::warn!(target = %target.display(), error = %err, "press file removal failed");
                Err(ApplicationError::storage(format!(
                    "cannot remove {}: {err}",
                    target.display()
                )))
            }
        }
    }

    fn press_file_url(&self, press_id: PressId, file_name: &str) -> String {
        format!("{}/presses/{press_id}/{file_name}", self.base_url)
    }
}

/// Staged uploads stored under random names below one directory.
#[derive(Clone)]
pub struct LocalTemporaryFileStore {
    root: PathBuf,
}

impl LocalTemporaryFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn owns(&self, path: &Path) -> bool {
        path.parent() == Some(self.root.as_path())
    }
}

#[async_trait]
impl TemporaryFileStore for LocalTemporaryFileStore {
    async fn store(&self, user_id: UserId, bytes: &[u8]) -> ApplicationResult<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::storage(format!("cannot create temporary dir: {err}")))?;
        let path = self
            .root
            .join(format!("{user_id}-{}", uuid::Uuid::new_v4().simple()));
        tokio::fs::write(&path, bytes).await.map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "temporary file write failed");
            ApplicationError::storage(format!("cannot write temporary file: {err}"))
        })?;
        Ok(path.to_string_lossy().into_owned())
    }

    async fn remove(&self, path: &str) -> ApplicationResult<()> {
        let path = Path::new(path);
        if !self.owns(path) {
            return Err(ApplicationError::storage(format!(
                "{} is outside the temporary area",
                path.display()
            )));
        }
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::storage(format!(
                "cannot remove temporary file: {err}"
            ))),
        }
    }
}
