pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Press;
pub use repository::PressRepository;
pub use value_objects::{CopyrightHolderType, MetadataField, MetadataRequirement};
