pub mod entity;
pub mod mime;
pub mod repository;

pub use entity::{NewTemporaryFile, TemporaryFile};
pub use mime::detect_mime_type;
pub use repository::TemporaryFileRepository;
