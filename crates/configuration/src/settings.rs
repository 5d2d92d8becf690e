use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an absent `config.toml` still yields a
/// runnable service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

/// Where the HTTP transport listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

/// Knobs for the synthesis engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixes the random stream. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Top companies attached to each sector overview.
    pub top_companies: usize,
    /// Companies listed in a sector drill-down.
    pub detail_companies: usize,
    /// Company list size when the caller gives no limit.
    pub default_company_limit: usize,
    /// Upper clamp for caller-supplied limits.
    pub max_company_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            top_companies: 3,
            detail_companies: 20,
            default_company_limit: 10,
            max_company_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, e.g. `info` or `web_server=debug,info`.
    pub level: String,
    /// When set, logs are also written to a daily rolling file here.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "psx-sectors.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// A TOML file of `[[sectors]]` that replaces the built-in catalog.
    pub path: Option<PathBuf>,
}
