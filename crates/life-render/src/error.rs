//! Render and export error types.

use thiserror::Error;

/// Render error type.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Engine construction failed.
    #[error("simulation error: {0}")]
    Life(#[from] life_core::LifeError),

    /// No preset with this name.
    #[error("unknown preset: {0} (known presets: {known})", known = crate::presets::names().join(", "))]
    UnknownPreset(String),

    /// An environment variable could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    Config { key: &'static str, value: String },

    /// Exported frames could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
