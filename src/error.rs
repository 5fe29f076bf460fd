use thiserror::Error;

/// Rejected configuration values; callers log them and keep the default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid hex color {0:?}, expected #rrggbb or #rgb")]
    InvalidColor(String),
    #[error("invalid particle count {0:?}, expected an integer up to {1}")]
    InvalidParticleCount(String, usize),
}
