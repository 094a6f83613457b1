use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::errors::ConfigError;
use crate::config::types::Config;

/// Reads a JSON config file. Validation is a separate step.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid config
/// document.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    info!("Loading config from '{}'", path.display());

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_json::from_str(&content)?;

    debug!(
        "Loaded config: {} variables, {} equations, {} quizzes",
        config.variables.len(),
        config.equations.len(),
        config.quiz.amount
    );
    Ok(config)
}
