mod form_view;
mod service;

pub use form_view::IntakeFormViewQuery;
pub use service::IntakeQueryService;
