// src/domain/locale.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// A locale code such as `en`, `en_US` or `sr_RS@latin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_well_formed(&value) {
            return Err(DomainError::Validation(format!("invalid locale '{value}'")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-letter language code stored alongside a publication.
    pub fn language(&self) -> &str {
        &self.0[..2]
    }

    pub fn display_name(&self) -> String {
        KNOWN_LOCALE_NAMES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| (*name).to_string())
            .unwrap_or_else(|| self.0.clone())
    }
}

fn is_well_formed(value: &str) -> bool {
    let (base, script) = match value.split_once('@') {
        Some((base, script)) => (base, Some(script)),
        None => (value, None),
    };
    if let Some(script) = script {
        if script.is_empty() || !script.chars().all(|c| c.is_ascii_alphanumeric()) {
            return false;
        }
    }
    let (lang, region) = match base.split_once('_') {
        Some((lang, region)) => (lang, Some(region)),
        None => (base, None),
    };
    let lang_ok = (2..=3).contains(&lang.len()) && lang.chars().all(|c| c.is_ascii_lowercase());
    let region_ok = region
        .map(|r| (2..=3).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(true);
    lang_ok && region_ok
}

const KNOWN_LOCALE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("en_US", "English"),
    ("fr_CA", "Français (Canada)"),
    ("fr_FR", "Français (France)"),
    ("de", "Deutsch"),
    ("de_DE", "Deutsch"),
    ("es", "Español"),
    ("es_ES", "Español (España)"),
    ("pt_BR", "Português (Brasil)"),
    ("pt_PT", "Português (Portugal)"),
    ("it", "Italiano"),
    ("it_IT", "Italiano"),
    ("ja", "日本語"),
    ("nl", "Nederlands"),
    ("sr_RS@latin", "Srpski"),
];

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-locale values of one attribute.
///
/// Lookups go through [`Localized::resolve`], which tries the requested
/// locale, then the press primary locale, then the first stored entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized<T>(BTreeMap<Locale, T>);

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T> Localized<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(locale: Locale, value: T) -> Self {
        let mut map = BTreeMap::new();
        map.insert(locale, value);
        Self(map)
    }

    pub fn get(&self, locale: &Locale) -> Option<&T> {
        self.0.get(locale)
    }

    pub fn get_mut(&mut self, locale: &Locale) -> Option<&mut T> {
        self.0.get_mut(locale)
    }

    pub fn set(&mut self, locale: Locale, value: T) {
        self.0.insert(locale, value);
    }

    pub fn remove(&mut self, locale: &Locale) -> Option<T> {
        self.0.remove(locale)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &T)> {
        self.0.iter()
    }

    pub fn resolve(&self, requested: &Locale, primary: &Locale) -> Option<&T> {
        self.0
            .get(requested)
            .or_else(|| self.0.get(primary))
            .or_else(|| self.0.values().next())
    }
}

impl Localized<String> {
    /// Like [`Localized::resolve`] but skips blank entries.
    pub fn resolve_text(&self, requested: &Locale, primary: &Locale) -> Option<&str> {
        let non_blank = |locale: &Locale| {
            self.0
                .get(locale)
                .map(String::as_str)
                .filter(|text| !text.trim().is_empty())
        };
        non_blank(requested)
            .or_else(|| non_blank(primary))
            .or_else(|| {
                self.0
                    .values()
                    .map(String::as_str)
                    .find(|text| !text.trim().is_empty())
            })
    }
}

impl<T> FromIterator<(Locale, T)> for Localized<T> {
    fn from_iter<I: IntoIterator<Item = (Locale, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
