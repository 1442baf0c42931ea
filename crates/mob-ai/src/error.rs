//! Errors raised while building chase configuration.
//!
//! The goals themselves never fail: a missing target, an unreachable target
//! or a rejected move are ordinary outcomes reported through the predicate
//! results. Only loading and validating configuration is fallible.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("speed factor must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("{field} must be non-negative and finite, got {value}")]
    InvalidDistance { field: &'static str, value: f64 },

    #[cfg(feature = "loaders")]
    #[error("failed to read chase config {path}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "loaders")]
    #[error("failed to parse chase config TOML")]
    Parse(#[from] toml::de::Error),
}
