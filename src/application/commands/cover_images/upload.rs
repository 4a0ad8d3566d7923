use super::CoverImageService;
use crate::{
    application::{
        dto::TemporaryFileDto,
        error::{ApplicationError, ApplicationResult},
        scope::{RequestScope, ensure_editorial_access},
    },
    domain::temporary_file::{NewTemporaryFile, detect_mime_type},
};
use bytes::Bytes;

pub struct UploadTemporaryFileCommand {
    pub file_name: String,
    pub declared_type: Option<String>,
    pub bytes: Bytes,
}

impl CoverImageService {
    /// Stages an upload for the acting user; a later save consumes it.
    pub async fn upload_temporary_file(
        &self,
        scope: &RequestScope,
        command: UploadTemporaryFileCommand,
    ) -> ApplicationResult<TemporaryFileDto> {
        ensure_editorial_access(self.user_groups.as_ref(), scope).await?;
        if command.bytes.is_empty() {
            return Err(ApplicationError::validation("uploaded file is empty"));
        }
        let file_type = detect_mime_type(&command.bytes, command.declared_type.as_deref());
        let file_path = self
            .temporary_store
            .store(scope.user.id, &command.bytes)
            .await?;

        let record = NewTemporaryFile {
            user_id: scope.user.id,
            file_path: file_path.clone(),
            original_file_name: command.file_name,
            file_type,
            file_size: command.bytes.len() as i64,
            date_uploaded: self.clock.now(),
        };
        let file = match self.temporary_files.insert(record).await {
            Ok(file) => file,
            Err(err) => {
                // do not leave orphaned bytes behind
                if let Err(cleanup) = self.temporary_store.remove(&file_path).await {
                    tracing::warn!(path = %file_path, error = %cleanup, "temporary file cleanup failed");
                }
                return Err(err.into());
            }
        };

        tracing::debug!(temporary_file_id = %file.id, user_id = %scope.user.id, file_type = %file.file_type, "temporary file stored");
        Ok(TemporaryFileDto {
            temporary_file_id: file.id.into(),
            file_type: file.file_type,
            file_size: file.file_size,
        })
    }
}
