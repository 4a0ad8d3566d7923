// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::UserGroup;
pub use repository::{StageAssignmentRepository, UserGroupRepository};
pub use value_objects::Role;
