// src/config/config_error.rs
//
// Errors raised while loading or validating config.toml

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color {value:?}: expected #RRGGBB")]
    InvalidColor { value: String },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
