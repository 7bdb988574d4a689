use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:3004";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

/// Client configuration.
///
/// A browser bundle has no process environment, so values are captured when the crate is
/// compiled. Unset variables fall back to the defaults above.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base address of the characters REST API, without a trailing slash.
    pub api_base_url: String,
    /// How long a toast stays on screen before fading out.
    pub toast_duration_ms: u32,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("ROSTER_API_URL"),
            option_env!("ROSTER_TOAST_DURATION_MS"),
            option_env!("ROSTER_LOG_LEVEL"),
        )
    }

    pub fn from_vars(
        api_url: Option<&str>,
        toast_duration_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = api_url
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let toast_duration_ms = match toast_duration_ms {
            Some(value) => value
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "ROSTER_TOAST_DURATION_MS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_TOAST_DURATION_MS,
        };

        let log_level = match log_level {
            Some(value) => value
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "ROSTER_LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            api_base_url,
            toast_duration_ms,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            log_level: Level::INFO,
        }
    }
}
