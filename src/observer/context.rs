use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::observer::traits::{Operation, Resource};
use crate::validation::{patterns::parse_iso_date, ValidationErrors};

/// Settings observers need that come from configuration
#[derive(Debug, Clone, Copy)]
pub struct PipelineSettings {
    pub quarantine_period_days: i64,
    pub today: NaiveDate,
}

/// Payload and accumulated errors flowing through the observer pipeline
#[derive(Debug)]
pub struct ObserverContext {
    pub resource: Resource,
    pub operation: Operation,
    pub payload: Map<String, Value>,

    // Facts about the stored entity an update targets
    pub enrollment_completed: bool,

    pub settings: PipelineSettings,
    pub errors: ValidationErrors,
}

impl ObserverContext {
    pub fn new(
        resource: Resource,
        operation: Operation,
        payload: Map<String, Value>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            resource,
            operation,
            payload,
            enrollment_completed: false,
            settings,
            errors: ValidationErrors::new(),
        }
    }

    pub fn with_enrollment_completed(mut self, completed: bool) -> Self {
        self.enrollment_completed = completed;
        self
    }

    /// Non-null string value of a field
    pub fn text(&self, field: &str) -> Option<&str> {
        self.payload.get(field).and_then(Value::as_str)
    }

    /// Whether a field carries any non-null value
    pub fn has(&self, field: &str) -> bool {
        self.payload.get(field).map(|v| !v.is_null()).unwrap_or(false)
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        self.text(field).and_then(parse_iso_date)
    }

    pub fn reject(&mut self, field: &str, key: &'static str) {
        self.errors.reject(field, key);
    }
}
