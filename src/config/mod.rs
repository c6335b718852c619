use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::ops::RangeInclusive;

use crate::i18n::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub tracking: TrackingConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres connection string. Without one the in-memory store is used.
    pub url: Option<String>,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    pub quarantine_period_days: i64,
    pub activation_code_expiry_hours: i64,
    pub default_locale: Locale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

pub const QUARANTINE_PERIOD_DAYS: RangeInclusive<i64> = 1..=365;
pub const ACTIVATION_CODE_EXPIRY_HOURS: RangeInclusive<i64> = 1..=24 * 90;

impl TrackingConfig {
    pub fn quarantine_period(&self) -> chrono::Duration {
        chrono::Duration::days(clamp(self.quarantine_period_days, &QUARANTINE_PERIOD_DAYS))
    }

    pub fn activation_code_validity(&self) -> chrono::Duration {
        chrono::Duration::hours(clamp(self.activation_code_expiry_hours, &ACTIVATION_CODE_EXPIRY_HOURS))
    }
}

fn clamp(value: i64, range: &RangeInclusive<i64>) -> i64 {
    value.clamp(*range.start(), *range.end())
}

/// Parses an override, ignoring values outside `range`
fn bounded(name: &str, value: &str, range: &RangeInclusive<i64>) -> Option<i64> {
    match value.parse::<i64>() {
        Ok(v) if range.contains(&v) => Some(v),
        _ => {
            tracing::warn!("Ignoring {}={}, expected a whole number in {:?}", name, value, range);
            None
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Some(port) = env::var("QUARANO_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse().ok())
        {
            self.server.port = port;
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL") {
            if !v.trim().is_empty() {
                self.database.url = Some(v);
            }
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // Tracking overrides
        if let Ok(v) = env::var("TRACKING_QUARANTINE_PERIOD_DAYS") {
            if let Some(days) = bounded("TRACKING_QUARANTINE_PERIOD_DAYS", &v, &QUARANTINE_PERIOD_DAYS) {
                self.tracking.quarantine_period_days = days;
            }
        }
        if let Ok(v) = env::var("TRACKING_ACTIVATION_CODE_EXPIRY_HOURS") {
            if let Some(hours) = bounded("TRACKING_ACTIVATION_CODE_EXPIRY_HOURS", &v, &ACTIVATION_CODE_EXPIRY_HOURS) {
                self.tracking.activation_code_expiry_hours = hours;
            }
        }
        if let Ok(v) = env::var("TRACKING_DEFAULT_LOCALE") {
            self.tracking.default_locale = v.parse().unwrap_or(self.tracking.default_locale);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                connection_timeout: 30,
            },
            tracking: TrackingConfig::default(),
            security: SecurityConfig {
                jwt_secret: "quarano-development-secret".to_string(),
                jwt_expiry_hours: 24 * 7, // 1 week
                enable_cors: true,
                cors_origins: vec!["*".to_string()],
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: None,
                max_connections: 20,
                connection_timeout: 10,
            },
            tracking: TrackingConfig::default(),
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
                enable_cors: true,
                cors_origins: vec!["https://staging.quarano.de".to_string()],
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                url: None,
                max_connections: 50,
                connection_timeout: 5,
            },
            tracking: TrackingConfig::default(),
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 4,
                enable_cors: true,
                cors_origins: vec!["https://app.quarano.de".to_string()],
            },
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            quarantine_period_days: 14,
            activation_code_expiry_hours: 72,
            default_locale: Locale::De,
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_config_has_usable_secret() {
        let config = AppConfig::development();
        assert!(!config.security.jwt_secret.is_empty());
        assert!(config.database.url.is_none());
        assert_eq!(config.tracking.quarantine_period_days, 14);
    }

    #[test]
    fn production_config_requires_explicit_secret() {
        let config = AppConfig::production();
        assert!(config.security.jwt_secret.is_empty());
        assert_eq!(config.security.jwt_expiry_hours, 4);
    }

    #[test]
    fn quarantine_period_is_expressed_in_days() {
        let tracking = TrackingConfig::default();
        assert_eq!(tracking.quarantine_period(), chrono::Duration::days(14));
        assert_eq!(tracking.activation_code_validity(), chrono::Duration::hours(72));
    }

    #[test]
    fn out_of_range_periods_are_clamped() {
        let tracking = TrackingConfig {
            quarantine_period_days: i64::MAX,
            activation_code_expiry_hours: -5,
            ..TrackingConfig::default()
        };
        assert_eq!(tracking.quarantine_period(), chrono::Duration::days(365));
        assert_eq!(tracking.activation_code_validity(), chrono::Duration::hours(1));
    }

    #[test]
    fn overrides_outside_their_range_are_ignored() {
        assert_eq!(bounded("DAYS", "21", &QUARANTINE_PERIOD_DAYS), Some(21));
        assert_eq!(bounded("DAYS", "9223372036854775807", &QUARANTINE_PERIOD_DAYS), None);
        assert_eq!(bounded("DAYS", "0", &QUARANTINE_PERIOD_DAYS), None);
        assert_eq!(bounded("DAYS", "two weeks", &QUARANTINE_PERIOD_DAYS), None);
    }
}
