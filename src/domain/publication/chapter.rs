use crate::domain::ids::{ChapterId, PublicationId};
use crate::domain::locale::Localized;

/// A chapter of an edited volume; each may carry its own DOI.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: ChapterId,
    pub publication_id: PublicationId,
    pub title: Localized<String>,
    pub seq: i32,
    pub doi_suffix: Option<String>,
    pub publisher_id: Option<String>,
    pub doi: Option<String>,
}
