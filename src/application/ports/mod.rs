// src/application/ports/mod.rs
pub mod search;
pub mod security;
pub mod storage;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type TokenManagerPort = dyn security::TokenManager;
pub type CsrfTokensPort = dyn security::CsrfTokens;
pub type ClockPort = dyn time::Clock;
pub type PublicFileStorePort = dyn storage::PublicFileStore;
pub type TemporaryFileStorePort = dyn storage::TemporaryFileStore;
pub type SearchIndexPort = dyn search::SubmissionSearchIndex;
