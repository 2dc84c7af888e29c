use serde::Deserialize;
use std::time::Duration;

/// Element id of the optional configuration block in the host page
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub alerts: AlertsConfig,
    pub search: SearchConfig,
    pub flash: FlashConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every `/api/...` path; empty means same origin
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AlertsConfig {
    pub poll_interval_ms: u32,
}

/// Default and fallback alert poll interval
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;
/// Shorter intervals would hammer the alerts endpoint
pub const MIN_POLL_INTERVAL_MS: u32 = 1_000;

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl AlertsConfig {
    /// Intervals below [`MIN_POLL_INTERVAL_MS`] fall back to the default
    pub fn poll_interval(&self) -> Duration {
        let ms = if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            log::warn!(
                "alerts.poll_interval_ms = {} is below {} ms, using {} ms",
                self.poll_interval_ms,
                MIN_POLL_INTERVAL_MS,
                DEFAULT_POLL_INTERVAL_MS
            );
            DEFAULT_POLL_INTERVAL_MS
        } else {
            self.poll_interval_ms
        };
        Duration::from_millis(u64::from(ms))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_query_len: 2 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FlashConfig {
    pub dismiss_after_ms: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[alerts]
poll_interval_ms = 30000

[search]
min_query_len = 2

[flash]
dismiss_after_ms = 5000

[logging]
level = "debug"
"#;

pub fn parse_config(contents: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration for the running page
///
/// Search order:
/// 1. `<script id="app-config" type="application/toml">` in the host page
/// 2. Falls back to embedded default config
///
/// Runs before logging is initialised, so the outcome is returned as a
/// message for the caller to log.
pub fn load_config() -> (ClientConfig, String) {
    let block = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    if let Some(contents) = block {
        match parse_config(&contents) {
            Ok(config) => return (config, format!("Loaded config from #{}", CONFIG_ELEMENT_ID)),
            Err(e) => {
                let note = format!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                return (default_config(), note);
            }
        }
    }

    (default_config(), "Using default embedded configuration".to_string())
}

fn default_config() -> ClientConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.alerts.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.flash.dismiss_after_ms, 5000);
        assert_eq!(config.logging.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [alerts]
            poll_interval_ms = 1000

            [logging]
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.alerts.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.logging.log_level(), log::Level::Warn);
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.search.min_query_len, 2);
    }

    #[test]
    fn test_too_short_poll_interval_falls_back() {
        let config = parse_config("[alerts]\npoll_interval_ms = 0").unwrap();
        assert_eq!(config.alerts.poll_interval(), Duration::from_secs(30));

        let alerts = AlertsConfig {
            poll_interval_ms: MIN_POLL_INTERVAL_MS - 1,
        };
        assert_eq!(alerts.poll_interval(), Duration::from_secs(30));

        let alerts = AlertsConfig {
            poll_interval_ms: MIN_POLL_INTERVAL_MS,
        };
        assert_eq!(alerts.poll_interval(), Duration::from_millis(1_000));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(parse_config("[alerts]\npoll_interval_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };
        assert_eq!(logging.log_level(), log::Level::Debug);
    }
}
