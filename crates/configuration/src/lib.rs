use crate::error::ConfigError;
use core_types::SectorBaseline;
use serde::Deserialize;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{CatalogConfig, Config, EngineConfig, LoggingConfig, ServerConfig};

/// Prefix for environment overrides, e.g. `SECTORS__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "SECTORS";

/// Loads the application configuration.
///
/// Sources are layered: struct defaults, then the TOML file at `path` (optional),
/// then `SECTORS__`-prefixed environment variables. The merged result is
/// validated before it is returned.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}

/// Rejects settings the engine cannot honour.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError {
            key: "server.port",
            reason: "must be non-zero".to_string(),
        });
    }
    let engine = &config.engine;
    if engine.top_companies == 0 {
        return Err(ConfigError::ValidationError {
            key: "engine.top_companies",
            reason: "must be at least 1".to_string(),
        });
    }
    if engine.default_company_limit > engine.max_company_limit {
        return Err(ConfigError::ValidationError {
            key: "engine.default_company_limit",
            reason: format!(
                "{} exceeds engine.max_company_limit ({})",
                engine.default_company_limit, engine.max_company_limit
            ),
        });
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    sectors: Vec<SectorBaseline>,
}

/// Reads a catalog override file: a TOML document with `[[sectors]]` tables.
pub fn load_catalog(path: &Path) -> Result<Vec<SectorBaseline>, ConfigError> {
    let file = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .build()
        .and_then(|raw| raw.try_deserialize::<CatalogFile>())
        .map_err(|source| ConfigError::CatalogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), sectors = file.sectors.len(), "Catalog file loaded.");
    Ok(file.sectors)
}
