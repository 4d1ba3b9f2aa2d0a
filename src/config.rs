//! Build Configuration
//!
//! Settings baked into the WASM bundle at compile time:
//! - `LIBRERIA_API_URL`: books collection endpoint
//! - `LIBRERIA_LOG`: console log level (`error`, `warn`, `info`, `debug`, `trace`)

use std::str::FromStr;

use libreria_core::ApiConfig;

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: log::Level,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LIBRERIA_API_URL"), option_env!("LIBRERIA_LOG"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api: ApiConfig::from_option(api_url),
            log_level: log_level
                .and_then(|name| log::Level::from_str(name.trim()).ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("/api/libri/"), Some("DEBUG"));
        assert_eq!(config.api.collection_url(), "/api/libri");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = AppConfig::from_values(None, Some("chatty"));
        assert_eq!(config.log_level, log::Level::Info);
    }
}
