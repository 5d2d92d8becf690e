use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Failed to read catalog file {path}: {source}")]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("Invalid setting {key}: {reason}")]
    ValidationError { key: &'static str, reason: String },
}
