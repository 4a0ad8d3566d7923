use crate::domain::ids::{CategoryId, PressId, SeriesId};
use crate::domain::locale::{Locale, Localized};

#[derive(Debug, Clone)]
pub struct Series {
    pub id: SeriesId,
    pub press_id: PressId,
    pub title: Localized<String>,
    pub seq: i32,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub press_id: PressId,
    pub parent_id: Option<CategoryId>,
    pub title: Localized<String>,
    pub seq: i32,
}

impl Series {
    pub fn localized_title(&self, locale: &Locale, primary: &Locale) -> String {
        self.title
            .resolve_text(locale, primary)
            .unwrap_or_default()
            .to_string()
    }
}

impl Category {
    pub fn localized_title(&self, locale: &Locale, primary: &Locale) -> String {
        self.title
            .resolve_text(locale, primary)
            .unwrap_or_default()
            .to_string()
    }
}
