pub mod author;
pub mod chapter;
pub mod cover_image;
pub mod entity;
pub mod repository;

pub use author::{Author, NewAuthor, author_string};
pub use chapter::Chapter;
pub use cover_image::{CoverImage, cover_image_file_name, image_extension};
pub use entity::{NewPublication, Publication, PublicationStatus};
pub use repository::{ChapterRepository, PublicationRepository};
