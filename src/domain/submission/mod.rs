pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewSubmission, PROGRESS_START, Submission};
pub use repository::SubmissionRepository;
pub use value_objects::{SubmissionStatus, WorkType, WorkflowStage};
