use std::collections::HashMap;

use axum::{extract::Query, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use yatri_core::config::WeatherConfig;
use yatri_core::error::YatriError;
use yatri_core::traits::WeatherProvider;

use crate::{Condition, OpenWeatherProvider, WeatherQuery};

const KEY: &str = "testkey";

/// Stand-in for the OpenWeather endpoint.
async fn stub_weather(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if params.get("appid").map(String::as_str) != Some(KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"cod": 401, "message": "Invalid API key"})),
        );
    }
    if params.get("units").map(String::as_str) != Some("metric") {
        return (StatusCode::BAD_REQUEST, Json(json!({"message": "expected metric"})));
    }
    let name = match (params.get("q"), params.get("lat"), params.get("lon")) {
        (Some(q), _, _) if q == "Nowhere" => {
            return (StatusCode::NOT_FOUND, Json(json!({"cod": "404", "message": "city not found"})));
        }
        (Some(q), _, _) if q == "Broken" => {
            return (StatusCode::BAD_GATEWAY, Json(json!({})));
        }
        (Some(q), _, _) => q.clone(),
        (None, Some(lat), Some(lon)) => format!("{lat},{lon}"),
        _ => return (StatusCode::BAD_REQUEST, Json(json!({"message": "Nothing to geocode"}))),
    };
    (
        StatusCode::OK,
        Json(json!({
            "name": name,
            "main": {"temp": 26.6, "feels_like": 28.4, "humidity": 61, "pressure": 1008},
            "weather": [{"main": "Rain", "description": "light rain", "icon": "10d"}],
            "wind": {"speed": 3.6},
            "visibility": 6000
        })),
    )
}

async fn spawn_stub() -> String {
    let app = Router::new().route("/weather", get(stub_weather));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn provider(base_url: &str, api_key: &str) -> OpenWeatherProvider {
    OpenWeatherProvider::from_config(&WeatherConfig {
        api_key: api_key.to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
        default_city: "Ranchi".to_string(),
    })
    .unwrap()
}

fn weather_message(err: YatriError) -> String {
    match err {
        YatriError::Weather(msg) => msg,
        other => panic!("expected weather error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_city_report_is_reshaped() {
    let base = spawn_stub().await;
    let report = provider(&base, KEY)
        .current(&WeatherQuery::city("Ranchi"))
        .await
        .unwrap();

    assert_eq!(report.location, "Ranchi");
    assert_eq!(report.temperature, 27);
    assert_eq!(report.feels_like, 28);
    assert_eq!(report.description, "light rain");
    assert_eq!(report.humidity, 61);
    assert_eq!(report.wind_speed, 3.6);
    assert_eq!(report.pressure, 1008);
    assert_eq!(report.visibility, 6000);
    assert_eq!(report.condition(), Condition::Rain);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["temperature"].is_i64());
}

#[tokio::test]
async fn test_coordinates_forwarded() {
    let base = spawn_stub().await;
    let report = provider(&base, KEY)
        .current(&WeatherQuery::coords(23.3441, 85.3096))
        .await
        .unwrap();
    assert_eq!(report.location, "23.3441,85.3096");
}

#[tokio::test]
async fn test_missing_key_fails_without_request() {
    // Unroutable base URL: a request attempt would surface a transport error.
    let p = provider("http://127.0.0.1:9", "  ");
    assert!(!p.is_configured());
    let msg = weather_message(p.current(&WeatherQuery::city("Ranchi")).await.unwrap_err());
    assert_eq!(msg, "OpenWeather API key not configured");
}

#[tokio::test]
async fn test_missing_location_rejected() {
    let p = provider("http://127.0.0.1:9", KEY);
    let msg = weather_message(p.current(&WeatherQuery::default()).await.unwrap_err());
    assert!(msg.contains("coordinates"));
}

#[tokio::test]
async fn test_upstream_error_message_surfaced() {
    let base = spawn_stub().await;
    let msg = weather_message(
        provider(&base, "wrong")
            .current(&WeatherQuery::city("Ranchi"))
            .await
            .unwrap_err(),
    );
    assert_eq!(msg, "Weather API error: Invalid API key");

    let msg = weather_message(
        provider(&base, KEY)
            .current(&WeatherQuery::city("Nowhere"))
            .await
            .unwrap_err(),
    );
    assert_eq!(msg, "Weather API error: city not found");
}

#[tokio::test]
async fn test_upstream_error_without_message_uses_status() {
    let base = spawn_stub().await;
    let msg = weather_message(
        provider(&base, KEY)
            .current(&WeatherQuery::city("Broken"))
            .await
            .unwrap_err(),
    );
    assert_eq!(msg, "Weather API error: Bad Gateway");
}

#[tokio::test]
async fn test_transport_error_hides_key() {
    let p = provider("http://127.0.0.1:9", "supersecret");
    let msg = weather_message(p.current(&WeatherQuery::city("Ranchi")).await.unwrap_err());
    assert!(msg.starts_with("weather request failed"));
    assert!(!msg.contains("supersecret"));
}
