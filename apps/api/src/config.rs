use std::str::FromStr;

use anyhow::{Context, Result};

use crate::layout::config::DEFAULT_PRODUCT_LABEL;

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare environment starts the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Largest itinerary text accepted by the parse and export endpoints.
    pub max_text_bytes: usize,
    /// Left-aligned footer text on every exported page.
    pub product_label: String,
    /// Measurer used when an export request names no font.
    pub default_font: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_text_bytes: 256 * 1024,
            product_label: DEFAULT_PRODUCT_LABEL.to_string(),
            default_font: "helvetica".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: env_or("RUST_LOG", defaults.rust_log)?,
            max_text_bytes: env_or("MAX_TEXT_BYTES", defaults.max_text_bytes)?,
            product_label: env_or("PRODUCT_LABEL", defaults.product_label)?,
            default_font: env_or("DEFAULT_FONT", defaults.default_font)?,
        })
    }
}

/// Reads and parses `key`, falling back to `default` when it is unset.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
