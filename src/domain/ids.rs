// src/domain/ids.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::Validation(concat!($label, " id must be positive").into()))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a press, the publishing context that scopes everything else.
    PressId,
    "press"
);
entity_id!(SubmissionId, "submission");
entity_id!(PublicationId, "publication");
entity_id!(ChapterId, "chapter");
entity_id!(AuthorId, "author");
entity_id!(SeriesId, "series");
entity_id!(CategoryId, "category");
entity_id!(UserId, "user");
entity_id!(UserGroupId, "user group");
entity_id!(TemporaryFileId, "temporary file");
