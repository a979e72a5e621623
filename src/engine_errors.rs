//! # Engine Error Types Module
//!
//! Errors raised while loading engine configuration. Classification,
//! segmentation and scaling never fail: a missing match is `None`, and bad
//! numeric input is replaced with a safe default.

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A configuration file could not be read
    Io(String),
    /// A configuration file is not valid JSON, or has the wrong shape
    Parse(String),
    /// A setting holds a value that cannot be used
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Configuration I/O error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Configuration parse error: {msg}"),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
