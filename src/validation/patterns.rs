use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static ALPHABETIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s'.\-]+$").expect("valid regex"));
static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N}\s/\-]*$").expect("valid regex"));
static CITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s.\-()/]+$").expect("valid regex"));
static STREET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{N}\s.\-'/]+$").expect("valid regex"));
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s/\-()]*[0-9][0-9\s/\-()]*$").expect("valid regex"));
static ZIP_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("valid regex"));
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

pub const ISO_DATE: &str = "%Y-%m-%d";

/// Textual formats a payload field can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Alphabetic,
    AlphaNumeric,
    City,
    Street,
    Phone,
    ZipCode,
    Email,
}

impl FieldFormat {
    pub fn matches(&self, value: &str) -> bool {
        let regex = match self {
            FieldFormat::Alphabetic => &ALPHABETIC,
            FieldFormat::AlphaNumeric => &ALPHANUMERIC,
            FieldFormat::City => &CITY,
            FieldFormat::Street => &STREET,
            FieldFormat::Phone => &PHONE,
            FieldFormat::ZipCode => &ZIP_CODE,
            FieldFormat::Email => &EMAIL,
        };
        regex.is_match(value)
    }
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabetic_rejects_digits_and_symbols() {
        assert!(FieldFormat::Alphabetic.matches("Michael"));
        assert!(FieldFormat::Alphabetic.matches("Müller-Lüdenscheidt"));
        assert!(FieldFormat::Alphabetic.matches("Fleischereifachverkäufer"));
        assert!(!FieldFormat::Alphabetic.matches("Michael 123"));
        assert!(!FieldFormat::Alphabetic.matches("some invalid name 1231 __\\"));
    }

    #[test]
    fn house_numbers_need_a_leading_letter_or_digit() {
        assert!(FieldFormat::AlphaNumeric.matches("12a"));
        assert!(FieldFormat::AlphaNumeric.matches("3-5"));
        assert!(!FieldFormat::AlphaNumeric.matches("-"));
    }

    #[test]
    fn address_parts() {
        assert!(FieldFormat::City.matches("Frankfurt (Oder)"));
        assert!(!FieldFormat::City.matches("city 123"));
        assert!(FieldFormat::Street.matches("Hauptstraße"));
        assert!(!FieldFormat::Street.matches("\\"));
        assert!(FieldFormat::ZipCode.matches("68159"));
        assert!(!FieldFormat::ZipCode.matches("6815"));
    }

    #[test]
    fn phone_numbers() {
        assert!(FieldFormat::Phone.matches("0123910"));
        assert!(FieldFormat::Phone.matches("+49 (0621) 123-45"));
        assert!(!FieldFormat::Phone.matches("012356789A"));
        assert!(!FieldFormat::Phone.matches("()"));
    }

    #[test]
    fn emails_and_dates() {
        assert!(FieldFormat::Email.matches("test@testtest.de"));
        assert!(!FieldFormat::Email.matches("not-an-email"));
        assert!(parse_iso_date("2020-04-01").is_some());
        assert!(parse_iso_date("01.04.2020").is_none());
    }
}
