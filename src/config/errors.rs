use std::path::PathBuf;

use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid identifier: {0}")]
    Identifier(#[from] UtilsError),
    #[error("{0}")]
    Invalid(String),
}
