pub mod cover_images;
pub mod intake;
