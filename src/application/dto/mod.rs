pub mod auth;
pub mod cover_images;
pub mod intake;
pub mod messages;
pub mod submissions;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use cover_images::{CoverImageDto, CoverImageFormViewDto, TemporaryFileDto};
pub use intake::{
    IntakeFormDataDto, IntakeFormViewDto, LinkActionDto, MetadataFieldFlagsDto, OptionDto,
};
pub use messages::JsonMessage;
pub use submissions::{PublicationDto, SubmissionDto};
