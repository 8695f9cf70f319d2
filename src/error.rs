// run  := cargo run --
// dir  := .
// kid  :=

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpshowError {
    #[error("config file does not exist: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path:   PathBuf,
        source: std::io::Error
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path:   PathBuf,
        source: toml::de::Error
    },

    #[error("invalid timeout '{value}': {source}")]
    InvalidTimeout {
        value:  String,
        source: humantime::DurationError
    },

    #[error("could not build statuspage client: {0}")]
    ClientConstruction(String),

    #[error("fetching {endpoint} incidents failed: {reason}")]
    Fetch { endpoint: &'static str, reason: String }
}

pub type Result<T> = std::result::Result<T, SpshowError>;
