// Localized messages for validation errors

mod messages;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use crate::app::AppState;

/// Languages the message catalog is maintained in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    En,
}

impl Locale {
    /// Picks the first supported language from an `Accept-Language` header value,
    /// honouring the order given by the client and ignoring quality weights.
    pub fn from_accept_language(header: Option<&str>, fallback: Locale) -> Locale {
        let Some(header) = header else {
            return fallback;
        };

        header
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .filter_map(|tag| tag.trim().parse().ok())
            .next()
            .unwrap_or(fallback)
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "de" => Ok(Locale::De),
            "en" => Ok(Locale::En),
            _ => Err(format!("unsupported locale: {}", tag)),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        Ok(Locale::from_accept_language(header, state.config.tracking.default_locale))
    }
}

/// Lookup over the static message catalogs
pub struct Messages;

impl Messages {
    /// Resolves a message key, falling back to German and finally to the key itself.
    pub fn get(locale: Locale, key: &'static str) -> &'static str {
        let catalog = match locale {
            Locale::De => messages::GERMAN,
            Locale::En => messages::ENGLISH,
        };

        lookup(catalog, key)
            .or_else(|| lookup(messages::GERMAN, key))
            .unwrap_or(key)
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_supported_language() {
        assert_eq!(Locale::from_accept_language(Some("fr-FR, en-US;q=0.8, de;q=0.5"), Locale::De), Locale::En);
        assert_eq!(Locale::from_accept_language(Some("de-DE"), Locale::En), Locale::De);
        assert_eq!(Locale::from_accept_language(Some("fr, it"), Locale::De), Locale::De);
        assert_eq!(Locale::from_accept_language(None, Locale::En), Locale::En);
    }

    #[test]
    fn resolves_german_messages() {
        assert_eq!(
            Messages::get(Locale::De, "Alphabetic"),
            "Dieses Feld darf nur Buchstaben enthalten!"
        );
        assert!(Messages::get(Locale::De, "Pattern.city").contains("gültige Stadt"));
        assert!(Messages::get(Locale::De, "Pattern.street").contains("gültige Straße"));
    }

    #[test]
    fn unknown_keys_fall_back_to_key() {
        assert_eq!(Messages::get(Locale::En, "Does.not.exist"), "Does.not.exist");
    }

    #[test]
    fn every_german_key_has_an_english_translation() {
        for (key, _) in messages::GERMAN {
            assert!(lookup(messages::ENGLISH, key).is_some(), "missing english text for {}", key);
        }
    }
}
