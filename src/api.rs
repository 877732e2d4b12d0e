//! HTTP API: chat dispatch and the weather proxy.
//!
//! Every response carries permissive CORS headers so a browser front end can
//! call the API directly; `OPTIONS` preflights are answered on every route.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use yatri_chat::dispatch;
use yatri_core::config::ApiConfig;
use yatri_core::error::YatriError;
use yatri_core::language::Language;
use yatri_core::traits::WeatherProvider;
use yatri_core::weather::WeatherQuery;

const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

type ApiError = (StatusCode, Json<Value>);

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    weather: Arc<dyn WeatherProvider>,
    api_key: Option<String>,
    uptime: Instant,
    default_language: Language,
}

impl ApiState {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        api_key: &str,
        default_language: Language,
    ) -> Self {
        Self {
            weather,
            api_key: (!api_key.is_empty()).then(|| api_key.to_string()),
            uptime: Instant::now(),
            default_language,
        }
    }
}

/// Chat request body.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    /// Language code or name. Defaults to the configured chat language.
    language: Option<String>,
}

/// Constant-time string comparison to prevent timing attacks on API token validation.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({"error": message.into()})))
}

/// Check bearer token auth. Returns `None` if authorized, `Some(response)` if rejected.
fn check_auth(headers: &HeaderMap, api_key: &Option<String>) -> Option<ApiError> {
    let key = api_key.as_ref()?;

    let Some(header) = headers.get(header::AUTHORIZATION) else {
        return Some(api_error(
            StatusCode::UNAUTHORIZED,
            "missing Authorization header",
        ));
    };

    let Ok(value) = header.to_str() else {
        return Some(api_error(
            StatusCode::UNAUTHORIZED,
            "invalid Authorization header",
        ));
    };

    match value.strip_prefix("Bearer ") {
        Some(token) if constant_time_eq(token, key) => None,
        _ => Some(api_error(StatusCode::UNAUTHORIZED, "invalid token")),
    }
}

/// `GET /api/health` — Health check with uptime and weather provider status.
async fn health(
    headers: HeaderMap,
    State(state): State<ApiState>,
) -> Result<Json<Value>, ApiError> {
    if let Some(err) = check_auth(&headers, &state.api_key) {
        return Err(err);
    }

    let weather = if state.weather.is_configured() {
        "configured"
    } else {
        "not_configured"
    };

    Ok(Json(json!({
        "status": "ok",
        "uptime_secs": state.uptime.elapsed().as_secs(),
        "weather": weather,
    })))
}

/// `POST /api/chat` — Run one message through the response dispatcher.
async fn chat(
    headers: HeaderMap,
    State(state): State<ApiState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    if let Some(err) = check_auth(&headers, &state.api_key) {
        return Err(err);
    }

    let Json(req) = body.map_err(|e| api_error(StatusCode::BAD_REQUEST, e.body_text()))?;

    if req.message.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "message is empty"));
    }

    let selected = match req.language.as_deref() {
        None => state.default_language,
        Some(code) => Language::from_str_loose(code).ok_or_else(|| {
            api_error(
                StatusCode::BAD_REQUEST,
                format!("unsupported language: {code}"),
            )
        })?,
    };

    let reply = dispatch(&req.message, selected);
    Ok(Json(json!(reply)))
}

/// `POST /api/weather` — Proxy a city or coordinate lookup upstream.
///
/// Any failure, including a malformed body, is reported as 500 `{error}`.
async fn weather(
    headers: HeaderMap,
    State(state): State<ApiState>,
    body: Result<Json<WeatherQuery>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    if let Some(err) = check_auth(&headers, &state.api_key) {
        return Err(err);
    }

    let result = match body {
        Ok(Json(query)) => state.weather.current(&query).await,
        Err(e) => Err(YatriError::Weather(e.body_text())),
    };

    match result {
        Ok(report) => Ok(Json(json!(report))),
        Err(e) => {
            error!("weather proxy: {e}");
            let message = match e {
                YatriError::Weather(msg) => msg,
                other => other.to_string(),
            };
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, message))
        }
    }
}

/// Answer CORS preflight requests.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Attach CORS headers to every response.
async fn add_cors(mut resp: Response) -> Response {
    let headers = resp.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    resp
}

/// Build the axum router with shared state.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/health", get(health).options(preflight))
        .route("/api/chat", post(chat).options(preflight))
        .route("/api/weather", post(weather).options(preflight))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024)) // 1 MB max request body
        .layer(middleware::map_response(add_cors))
        .with_state(state)
}

/// Start the API server and run until it fails.
pub async fn serve(config: &ApiConfig, state: ApiState) -> anyhow::Result<()> {
    if state.api_key.is_none() {
        warn!("API server running without authentication");
    }

    let app = build_router(state);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!("API server failed to bind to {addr}: {e}");
        e
    })?;

    info!("API server listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
