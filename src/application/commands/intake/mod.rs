// src/application/commands/intake/mod.rs
mod cancel;
mod copyright;
mod doi;
mod initialize;
mod metadata;
mod service;
mod submit;

pub use cancel::CancelIntakeCommand;
pub use initialize::InitializeIntakeCommand;
pub use metadata::{AuthorInput, MetadataInput};
pub use service::SubmissionIntakeService;
pub use submit::{FormEnvelope, SubmitIntakeCommand};
