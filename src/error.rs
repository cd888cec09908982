// Library errors. Assertion mismatches are never errors; they go to a Reporter.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a value into a comparable shape
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("value could not be serialized for inspection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failure to read a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
