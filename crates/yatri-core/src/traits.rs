use crate::{
    error::YatriError,
    weather::{WeatherQuery, WeatherReport},
};
use async_trait::async_trait;

/// Weather Provider trait.
///
/// The HTTP proxy and CLI talk to the upstream weather service only through
/// this trait, so handlers can be exercised against a stub.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether an API key is configured.
    fn is_configured(&self) -> bool;

    /// Fetch current conditions for the query.
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReport, YatriError>;
}
