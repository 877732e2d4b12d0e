mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::YatriError;
use crate::language::Language;
use defaults::*;

/// Environment variable that supplies the weather API key when the config
/// file leaves it empty.
pub const WEATHER_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level Yatri configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub yatri: YatriConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YatriConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional log file. Empty = log to stderr only.
    #[serde(default)]
    pub log_file: String,
}

impl Default for YatriConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            log_file: String::new(),
        }
    }
}

/// Chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Language selected when a session starts.
    #[serde(default)]
    pub default_language: Language,
    /// Simulated typing delay before the assistant replies. 0 disables it.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            typing_delay_ms: default_typing_delay_ms(),
        }
    }
}

/// Upstream weather provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather API key. Empty = fall back to `OPENWEATHER_API_KEY`.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    #[serde(default = "default_weather_timeout_secs")]
    pub timeout_secs: u64,
    /// City used by the CLI when no location is given.
    #[serde(default = "default_weather_city")]
    pub default_city: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout_secs(),
            default_city: default_weather_city(),
        }
    }
}

/// HTTP API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
    /// Bearer token for API authentication. Empty = no auth (for local-only use).
    #[serde(default)]
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
            api_key: String::new(),
        }
    }
}

impl Config {
    /// Fill an empty weather key from the given environment value.
    pub fn with_weather_key_from(mut self, env_value: Option<String>) -> Self {
        if self.weather.api_key.trim().is_empty() {
            if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
                self.weather.api_key = key.trim().to_string();
            }
        }
        self
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. The weather key is
/// taken from `OPENWEATHER_API_KEY` when the file does not set one.
pub fn load(path: &str) -> Result<Config, YatriError> {
    let config = load_file(Path::new(path))?;
    Ok(config.with_weather_key_from(std::env::var(WEATHER_KEY_ENV).ok()))
}

fn load_file(path: &Path) -> Result<Config, YatriError> {
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| YatriError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| YatriError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
