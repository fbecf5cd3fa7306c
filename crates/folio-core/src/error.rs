use thiserror::Error;

/// Reasons an effect declines to run. None of these are fatal to the page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EffectError {
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("no 2d drawing context on {0}")]
    NoContext(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("reveal window must satisfy 0 <= start < end <= 1, got {start}..{end}")]
    BadWindow { start: f32, end: f32 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("expected 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}
