// Field-level validation errors and format rules

pub mod patterns;

pub use patterns::FieldFormat;

use serde_json::{Map, Value};

use crate::i18n::{Locale, Messages};

/// Field name to message key, first rejection per field wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(String, &'static str)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &str, key: &'static str) {
        if !self.contains(field) {
            self.errors.push((field.to_string(), key));
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|(f, _)| f == field)
    }

    pub fn key_for(&self, field: &str) -> Option<&'static str> {
        self.errors.iter().find(|(f, _)| f == field).map(|(_, k)| *k)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(f, _)| f.as_str())
    }

    /// Renders the errors as a flat `{ field: message }` object
    pub fn localize(&self, locale: Locale) -> Map<String, Value> {
        self.errors
            .iter()
            .map(|(field, key)| (field.clone(), Value::String(Messages::get(locale, key).to_string())))
            .collect()
    }
}
