//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Yatri".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_typing_delay_ms() -> u64 {
    1500
}

pub fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

pub fn default_weather_timeout_secs() -> u64 {
    10
}

pub fn default_weather_city() -> String {
    "Ranchi".to_string()
}

pub fn default_api_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_api_port() -> u16 {
    3000
}
