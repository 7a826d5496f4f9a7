use thiserror::Error;

/// A config value that parsed as TOML but cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid color {value:?} for ui.{field}")]
    InvalidColor { field: &'static str, value: String },

    #[error("invalid log level {0:?} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("ui.{0} must be greater than zero")]
    ZeroDuration(&'static str),
}
