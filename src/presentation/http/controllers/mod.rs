// src/presentation/http/controllers/mod.rs
pub mod cover_images;
pub mod intake;
