use thiserror::Error;

/// Top-level error type for Yatri.
#[derive(Debug, Error)]
pub enum YatriError {
    /// Error from the weather proxy or its upstream provider.
    #[error("weather error: {0}")]
    Weather(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Static data failed load-time validation.
    #[error("data error: {0}")]
    Data(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
