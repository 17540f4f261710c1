//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SC_FREE_SHIPPING_THRESHOLD` - Free-shipping threshold in grosze (default: 20000, must be > 0)
//! - `SC_PAGE_SIZE` - Listing rows shown before "more" (default: 6, must be > 0)
//! - `SC_PREFERENCES_PATH` - Theme preference file (default: `.sebastianclothes/preferences.json`)
//! - `SC_PROMO_ENDS_AT` - RFC 3339 end of the promotion countdown (default: next UTC midnight)
//! - `SC_IMAGE_FALLBACK` - Image shown when a product image cannot be used (default: hero image)
//! - `SC_CATALOG_PATH` - YAML catalog replacing the built-in one
//! - `SC_LOG_FORMAT` - `text` or `json` (default: text)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use sebastian_clothes_core::catalog::demo::HERO_IMAGE;
use sebastian_clothes_core::presentation::DEFAULT_PAGE_SIZE;
use sebastian_clothes_core::session::DEFAULT_FREE_SHIPPING_THRESHOLD;
use sebastian_clothes_core::{FreeShipping, Price};
use thiserror::Error;

const DEFAULT_PREFERENCES_PATH: &str = ".sebastianclothes/preferences.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Free-shipping policy
    pub free_shipping: FreeShipping,
    /// Rows per listing page
    pub page_size: usize,
    /// Where the theme preference is stored
    pub preferences_path: PathBuf,
    /// End of the promotion countdown
    pub promo_ends_at: Option<DateTime<Utc>>,
    /// Image reference used when a product image fails
    pub image_fallback: String,
    /// Optional YAML catalog
    pub catalog_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(&|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    fn from_source(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_threshold = DEFAULT_FREE_SHIPPING_THRESHOLD.minor().to_string();
        let threshold = get_env_or_default(env, "SC_FREE_SHIPPING_THRESHOLD", &default_threshold)
            .parse::<u64>()
            .map_err(|e| invalid("SC_FREE_SHIPPING_THRESHOLD", e))?;
        let free_shipping = FreeShipping::new(Price::from_minor(threshold))
            .map_err(|e| invalid("SC_FREE_SHIPPING_THRESHOLD", e))?;

        let page_size = match env("SC_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        let promo_ends_at = env("SC_PROMO_ENDS_AT")
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|ts| ts.with_timezone(&Utc))
                    .map_err(|e| invalid("SC_PROMO_ENDS_AT", e))
            })
            .transpose()?;

        let log_format = match get_env_or_default(env, "SC_LOG_FORMAT", "text").as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(invalid(
                    "SC_LOG_FORMAT",
                    format!("expected text or json, got {other}"),
                ));
            }
        };

        Ok(Self {
            free_shipping,
            page_size,
            preferences_path: get_env_or_default(env, "SC_PREFERENCES_PATH", DEFAULT_PREFERENCES_PATH)
                .into(),
            promo_ends_at,
            image_fallback: get_env_or_default(env, "SC_IMAGE_FALLBACK", HERO_IMAGE),
            catalog_path: env("SC_CATALOG_PATH").map(PathBuf::from),
            log_format,
            sentry_dsn: env("SENTRY_DSN"),
        })
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            free_shipping: FreeShipping::default(),
            page_size: DEFAULT_PAGE_SIZE,
            preferences_path: DEFAULT_PREFERENCES_PATH.into(),
            promo_ends_at: None,
            image_fallback: HERO_IMAGE.to_string(),
            catalog_path: None,
            log_format: LogFormat::Text,
            sentry_dsn: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(env: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    env(key).unwrap_or_else(|| default.to_string())
}

fn invalid(key: &str, error: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), error.to_string())
}

/// Parse a positive page size.
fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.parse::<usize>() {
        Ok(0) => Err(invalid("SC_PAGE_SIZE", "must be greater than zero")),
        Ok(size) => Ok(size),
        Err(e) => Err(invalid("SC_PAGE_SIZE", e)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ShopConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ShopConfig::from_source(&|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(
            config.free_shipping.threshold(),
            DEFAULT_FREE_SHIPPING_THRESHOLD
        );
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(
            config.preferences_path,
            PathBuf::from(DEFAULT_PREFERENCES_PATH)
        );
        assert!(config.promo_ends_at.is_none());
        assert_eq!(config.image_fallback, HERO_IMAGE);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SC_FREE_SHIPPING_THRESHOLD", "15000"),
            ("SC_PAGE_SIZE", "3"),
            ("SC_PROMO_ENDS_AT", "2026-10-20T00:00:00+02:00"),
            ("SC_CATALOG_PATH", "catalog.yaml"),
            ("SC_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.free_shipping.threshold(), Price::from_minor(15_000));
        assert_eq!(config.page_size, 3);
        assert_eq!(
            config.promo_ends_at.unwrap().to_rfc3339(),
            "2026-10-19T22:00:00+00:00"
        );
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = load(&[("SC_FREE_SHIPPING_THRESHOLD", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SC_FREE_SHIPPING_THRESHOLD"));
    }

    #[test]
    fn test_non_numeric_threshold_rejected() {
        assert!(load(&[("SC_FREE_SHIPPING_THRESHOLD", "dwieście")]).is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(load(&[("SC_PAGE_SIZE", "0")]).is_err());
        assert!(load(&[("SC_PAGE_SIZE", "-2")]).is_err());
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let err = load(&[("SC_PROMO_ENDS_AT", "tomorrow")]).unwrap_err();
        assert!(err.to_string().contains("SC_PROMO_ENDS_AT"));
    }

    #[test]
    fn test_bad_log_format_rejected() {
        assert!(load(&[("SC_LOG_FORMAT", "xml")]).is_err());
    }
}
