mod form_view;

pub use form_view::{CoverImageFormViewQuery, CoverImageQueryService};
