// Ring 1: Input Validation - required fields, textual formats, dates and value types
use async_trait::async_trait;

use crate::observer::context::ObserverContext;
use crate::observer::error::ObserverError;
use crate::observer::traits::{Observer, ObserverRing, Operation, Resource};
use crate::validation::patterns::parse_iso_date;
use crate::validation::FieldFormat;

struct FieldRule {
    field: &'static str,
    format: FieldFormat,
    key: &'static str,
}

const fn rule(field: &'static str, format: FieldFormat, key: &'static str) -> FieldRule {
    FieldRule { field, format, key }
}

static ADDRESS_AND_CHANNELS: [FieldRule; 7] = [
    rule("street", FieldFormat::Street, "Pattern.street"),
    rule("houseNumber", FieldFormat::AlphaNumeric, "AlphaNumeric"),
    rule("zipCode", FieldFormat::ZipCode, "Pattern.zipCode"),
    rule("city", FieldFormat::City, "Pattern.city"),
    rule("phone", FieldFormat::Phone, "Pattern.phone"),
    rule("mobilePhone", FieldFormat::Phone, "Pattern.phone"),
    rule("email", FieldFormat::Email, "Email"),
];

static CASE_NAMES: [FieldRule; 2] = [
    rule("firstName", FieldFormat::Alphabetic, "Alphabetic"),
    rule("lastName", FieldFormat::Alphabetic, "Alphabetic"),
];

static CONTACT_NAMES: [FieldRule; 2] = [
    rule("firstName", FieldFormat::Alphabetic, "Pattern.firstName"),
    rule("lastName", FieldFormat::Alphabetic, "Pattern.lastName"),
];

static SYMPTOM_FIELDS: [FieldRule; 1] = [rule("name", FieldFormat::Alphabetic, "Alphabetic")];

const CASE_REQUIRED: &[(&str, &str)] = &[
    ("firstName", "NotNull"),
    ("lastName", "NotNull"),
    ("testDate", "NotNull"),
    ("quarantineStartDate", "NotNull"),
];

const CASE_DATES: &[&str] = &["dateOfBirth", "testDate", "quarantineStartDate", "quarantineEndDate"];

fn format_rules(resource: Resource) -> Vec<&'static FieldRule> {
    match resource {
        Resource::TrackedCase => CASE_NAMES.iter().chain(ADDRESS_AND_CHANNELS.iter()).collect(),
        Resource::ContactPerson => CONTACT_NAMES.iter().chain(ADDRESS_AND_CHANNELS.iter()).collect(),
        Resource::Symptom => SYMPTOM_FIELDS.iter().collect(),
        Resource::Comment => Vec::new(),
    }
}

/// Fields that must be present along with the message key used when they are not
pub fn required_fields(resource: Resource) -> &'static [(&'static str, &'static str)] {
    match resource {
        Resource::TrackedCase => CASE_REQUIRED,
        Resource::ContactPerson => &[],
        Resource::Symptom => &[("name", "NotNull")],
        Resource::Comment => &[("comment", "NotBlank")],
    }
}

/// Flags that must be JSON booleans
fn boolean_fields(resource: Resource) -> &'static [&'static str] {
    match resource {
        Resource::TrackedCase => &["infected"],
        Resource::ContactPerson => &["isHealthStaff", "isSenior", "hasPreExistingConditions"],
        Resource::Symptom => &["characteristic"],
        Resource::Comment => &[],
    }
}

/// Free text fields no format rule covers
fn text_fields(resource: Resource) -> &'static [&'static str] {
    match resource {
        Resource::ContactPerson => &["identificationHint", "remark"],
        Resource::Comment => &["comment"],
        _ => &[],
    }
}

fn date_fields(resource: Resource) -> &'static [&'static str] {
    match resource {
        Resource::TrackedCase => CASE_DATES,
        _ => &[],
    }
}

pub struct RequiredFieldsValidator;

#[async_trait]
impl Observer for RequiredFieldsValidator {
    fn name(&self) -> &'static str {
        "RequiredFieldsValidator"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::InputValidation
    }

    fn applies_to(&self, _resource: Resource, _operation: Operation) -> bool {
        true
    }

    fn priority(&self) -> u8 {
        10
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        for &(field, key) in required_fields(ctx.resource) {
            if !ctx.has(field) {
                ctx.reject(field, key);
            }
        }
        Ok(())
    }
}

pub struct FieldFormatValidator;

#[async_trait]
impl Observer for FieldFormatValidator {
    fn name(&self) -> &'static str {
        "FieldFormatValidator"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::InputValidation
    }

    fn applies_to(&self, resource: Resource, _operation: Operation) -> bool {
        !matches!(resource, Resource::Comment)
    }

    fn priority(&self) -> u8 {
        20
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        for rule in format_rules(ctx.resource) {
            if !ctx.has(rule.field) {
                continue;
            }
            let valid = ctx.text(rule.field).map(|v| rule.format.matches(v)).unwrap_or(false);
            if !valid {
                ctx.reject(rule.field, rule.key);
            }
        }
        Ok(())
    }
}

/// Checks ISO dates and that a date of birth lies in the past
pub struct DateFieldValidator;

#[async_trait]
impl Observer for DateFieldValidator {
    fn name(&self) -> &'static str {
        "DateFieldValidator"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::InputValidation
    }

    fn applies_to(&self, resource: Resource, _operation: Operation) -> bool {
        matches!(resource, Resource::TrackedCase)
    }

    fn priority(&self) -> u8 {
        30
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        for field in date_fields(ctx.resource) {
            if !ctx.has(field) {
                continue;
            }
            match ctx.text(field).and_then(parse_iso_date) {
                None => ctx.reject(field, "Date"),
                Some(date) if *field == "dateOfBirth" && date >= ctx.settings.today => ctx.reject(field, "Past"),
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Rejects values whose JSON type cannot bind to the field
pub struct FieldTypeValidator;

#[async_trait]
impl Observer for FieldTypeValidator {
    fn name(&self) -> &'static str {
        "FieldTypeValidator"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::InputValidation
    }

    fn applies_to(&self, _resource: Resource, _operation: Operation) -> bool {
        true
    }

    fn priority(&self) -> u8 {
        40
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        for &field in boolean_fields(ctx.resource) {
            if matches!(ctx.payload.get(field), Some(v) if !v.is_null() && !v.is_boolean()) {
                ctx.reject(field, "Boolean");
            }
        }
        for &field in text_fields(ctx.resource) {
            if matches!(ctx.payload.get(field), Some(v) if !v.is_null() && !v.is_string()) {
                ctx.reject(field, "Text");
            }
        }
        Ok(())
    }
}
