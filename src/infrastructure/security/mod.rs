// src/infrastructure/security/mod.rs
pub mod claims;
pub mod csrf;
pub mod token;
