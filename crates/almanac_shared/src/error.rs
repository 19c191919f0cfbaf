//! # Configuration Error Types
//!
//! Errors raised while loading, saving or editing the panel configuration.
//! Out-of-range values are never errors: they are clamped on load.

use thiserror::Error;

/// Errors that can occur while handling configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("config i/o failed for {path}: {source}")]
    Io {
        /// File that was being accessed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this record.
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("config serialize failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A settings field received a value of the wrong kind.
    #[error("field {field} does not accept {value}")]
    FieldKindMismatch {
        /// Field key.
        field: &'static str,
        /// Description of the rejected value.
        value: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
