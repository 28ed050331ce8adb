//! Error types
//!
//! Nothing in the per-frame path can fail. Errors only come out of building
//! geometry and loading settings.

use std::path::PathBuf;

/// Rejected strip geometry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("strip width must be at least one position")]
    EmptyField,

    #[error("left edge {left} is past right edge {right}")]
    InvertedBounds { left: f64, right: f64 },

    #[error("position {position} is outside the field [0, {max}]")]
    OutOfField { position: f64, max: f64 },

    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },
}

/// Failure to load or save [`Settings`](crate::Settings)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Field(#[from] FieldError),
}
