pub mod entity;
pub mod repository;

pub use entity::{Category, Series};
pub use repository::{CategoryRepository, SeriesRepository};
