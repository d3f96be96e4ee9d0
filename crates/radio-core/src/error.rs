//! Error types for the radio data model

use thiserror::Error;

/// Errors raised while decoding a persisted radio configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Mapping is missing a required key or is not config-shaped
    #[error("invalid radio config: {0}")]
    Decode(#[from] serde_json::Error),
}
