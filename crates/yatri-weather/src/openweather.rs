//! OpenWeather `/data/2.5/weather` provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};
use yatri_core::{
    config::WeatherConfig,
    error::YatriError,
    traits::WeatherProvider,
    weather::{WeatherQuery, WeatherReport, WeatherTarget},
};

/// OpenWeather current-conditions provider.
pub struct OpenWeatherProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherProvider {
    /// Create from config values.
    pub fn from_config(config: &WeatherConfig) -> Result<Self, YatriError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| YatriError::Weather(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.trim().to_string(),
        })
    }
}

#[derive(Deserialize)]
struct OwmResponse {
    name: String,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    wind: OwmWind,
    #[serde(default)]
    visibility: u32,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u32,
    pressure: u32,
}

#[derive(Deserialize)]
struct OwmCondition {
    description: String,
    icon: String,
}

#[derive(Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Deserialize)]
struct OwmError {
    message: Option<String>,
}

impl TryFrom<OwmResponse> for WeatherReport {
    type Error = YatriError;

    fn try_from(resp: OwmResponse) -> Result<Self, Self::Error> {
        let condition = resp.weather.into_iter().next().ok_or_else(|| {
            YatriError::Weather("Weather API error: response has no conditions".into())
        })?;
        Ok(WeatherReport {
            location: resp.name,
            temperature: resp.main.temp.round() as i64,
            feels_like: resp.main.feels_like.round() as i64,
            description: condition.description,
            humidity: resp.main.humidity,
            wind_speed: resp.wind.speed,
            icon: condition.icon,
            pressure: resp.main.pressure,
            visibility: resp.visibility,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    fn name(&self) -> &str {
        "openweather"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReport, YatriError> {
        if !self.is_configured() {
            return Err(YatriError::Weather(
                "OpenWeather API key not configured".into(),
            ));
        }

        let mut params: Vec<(&str, String)> = match query.target() {
            Some(WeatherTarget::City(city)) => vec![("q", city.to_string())],
            Some(WeatherTarget::Coords { lat, lon }) => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
            None => {
                return Err(YatriError::Weather(
                    "Either city name or coordinates (lat, lon) are required".into(),
                ))
            }
        };
        params.push(("units", "metric".to_string()));

        let url = format!("{}/weather", self.base_url.trim_end_matches('/'));
        debug!("openweather: GET {url} params={params:?} appid=[API_KEY]");

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                YatriError::Weather(format!("weather request failed: {}", e.without_url()))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OwmError>(&text)
                .ok()
                .and_then(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string()
                });
            warn!("openweather: {status} {message}");
            return Err(YatriError::Weather(format!("Weather API error: {message}")));
        }

        let body: OwmResponse = resp
            .json()
            .await
            .map_err(|e| YatriError::Weather(format!("invalid weather response: {}", e.without_url())))?;

        let report = WeatherReport::try_from(body)?;
        info!(
            "openweather: {} {}°C {}",
            report.location, report.temperature, report.description
        );
        Ok(report)
    }
}
