pub mod catalog;
pub mod doi;
pub mod errors;
pub mod ids;
pub mod locale;
pub mod press;
pub mod publication;
pub mod submission;
pub mod temporary_file;
pub mod user;
