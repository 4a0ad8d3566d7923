// src/application/validation.rs
use serde::Serialize;
use std::fmt;

/// A field that failed validation and the translation key describing why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn single(field: &'static str, message: &'static str) -> Self {
        Self(vec![FieldError { field, message }])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

type Check<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

struct Rule<T> {
    field: &'static str,
    message: &'static str,
    check: Check<T>,
}

/// Ordered list of predicate + message pairs run against one form record.
///
/// Only the first failing rule of a field is reported.
pub struct Validator<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> Validator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(
        mut self,
        field: &'static str,
        message: &'static str,
        check: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            field,
            message,
            check: Box::new(check),
        });
        self
    }

    pub fn validate(&self, input: &T) -> Result<(), FormErrors> {
        let mut errors: Vec<FieldError> = Vec::new();
        for rule in &self.rules {
            if errors.iter().any(|e| e.field == rule.field) {
                continue;
            }
            if !(rule.check)(input) {
                errors.push(FieldError {
                    field: rule.field,
                    message: rule.message,
                });
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(errors))
        }
    }
}

/// Absolute http(s)/ftp URL with a host.
pub fn is_valid_url(value: &str) -> bool {
    match url::Url::parse(value.trim()) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https" | "ftp") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

/// Optional text fields count as absent when blank.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
