mod delete;
mod save;
mod service;
mod upload;

pub use delete::DeleteCoverImageCommand;
pub use save::SaveCoverImageCommand;
pub use service::CoverImageService;
pub use upload::UploadTemporaryFileCommand;
