//! Weather request/response shapes shared by the proxy and its callers.

use serde::{Deserialize, Serialize};

/// A weather lookup by city name or by coordinates.
///
/// City takes precedence when both are given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl WeatherQuery {
    pub fn city(name: impl Into<String>) -> Self {
        Self {
            city: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn coords(lat: f64, lon: f64) -> Self {
        Self {
            city: None,
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    /// The effective target of this query, or `None` if it names nothing.
    pub fn target(&self) -> Option<WeatherTarget<'_>> {
        match (self.city.as_deref().map(str::trim), self.lat, self.lon) {
            (Some(city), _, _) if !city.is_empty() => Some(WeatherTarget::City(city)),
            (_, Some(lat), Some(lon)) => Some(WeatherTarget::Coords { lat, lon }),
            _ => None,
        }
    }
}

/// Resolved target of a [`WeatherQuery`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeatherTarget<'a> {
    City(&'a str),
    Coords { lat: f64, lon: f64 },
}

/// Current conditions, reshaped from the upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    /// Degrees Celsius, rounded.
    pub temperature: i64,
    /// Degrees Celsius, rounded.
    pub feels_like: i64,
    pub description: String,
    /// Percent.
    pub humidity: u32,
    /// Metres per second.
    pub wind_speed: f64,
    /// Provider icon code, e.g. `"10d"`.
    pub icon: String,
    /// hPa.
    pub pressure: u32,
    /// Metres.
    pub visibility: u32,
}

impl WeatherReport {
    pub fn condition(&self) -> Condition {
        Condition::from_icon(&self.icon)
    }
}

/// Coarse sky condition used to pick a display icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Clear,
    Cloudy,
    Rain,
    Snow,
}

impl Condition {
    /// Classify an OpenWeather icon code. Unknown codes (mist, storms)
    /// display as clear.
    pub fn from_icon(icon: &str) -> Self {
        let group = icon.get(..2).unwrap_or("");
        match group {
            "02" | "03" | "04" => Self::Cloudy,
            "09" | "10" => Self::Rain,
            "13" => Self::Snow,
            _ => Self::Clear,
        }
    }
}
