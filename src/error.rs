use thiserror::Error;

/// Errors raised while building an engine configuration.
///
/// The decision path itself never fails; configuration is the only
/// fallible surface.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("protection marker must not be empty")]
    EmptyMarker,
    #[error("protection marker {0:?} is not a single class token")]
    InvalidMarker(String),
    #[error("root id must not be empty")]
    EmptyRootId,
    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
