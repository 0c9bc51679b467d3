//! Frontend Configuration
//!
//! Values baked in at build time (`CUSTOMER_API_URL=... trunk build`).
//! Anything unparsable falls back to its default and is reported once the
//! logger is up.

use customer_core::{ClientConfig, DEFAULT_BASE_URL};
use log::Level;

const DEFAULT_LOG_LEVEL: Level = Level::Info;
const DEFAULT_ERROR_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Where the customer API lives
    pub client: ClientConfig,
    pub log_level: Level,
    /// How long an error banner stays up
    pub error_dismiss_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            log_level: DEFAULT_LOG_LEVEL,
            error_dismiss_ms: DEFAULT_ERROR_DISMISS_MS,
        }
    }
}

impl UiConfig {
    /// Read build-time overrides; returns the config plus warnings to log
    pub fn load() -> (Self, Vec<String>) {
        Self::from_values(
            option_env!("CUSTOMER_API_URL"),
            option_env!("CUSTOMER_LOG_LEVEL"),
            option_env!("CUSTOMER_ERROR_DISMISS_MS"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        log_level: Option<&str>,
        error_dismiss_ms: Option<&str>,
    ) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = api_url {
            match ClientConfig::parse(raw) {
                Ok(client) => config.client = client,
                Err(e) => warnings.push(format!("CUSTOMER_API_URL ignored ({e}), using {DEFAULT_BASE_URL}")),
            }
        }

        if let Some(raw) = log_level {
            match raw.trim().parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!("CUSTOMER_LOG_LEVEL `{raw}` ignored, using {DEFAULT_LOG_LEVEL}")),
            }
        }

        if let Some(raw) = error_dismiss_ms {
            match raw.trim().parse::<u32>() {
                Ok(ms) => config.error_dismiss_ms = ms,
                Err(_) => warnings.push(format!(
                    "CUSTOMER_ERROR_DISMISS_MS `{raw}` ignored, using {DEFAULT_ERROR_DISMISS_MS}"
                )),
            }
        }

        (config, warnings)
    }
}
