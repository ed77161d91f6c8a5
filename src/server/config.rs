//! Server configuration and CLI arguments.

use clap::{Parser, ValueEnum};

use crate::storage::config::{AwsTableConfig, StorageConfig, DEFAULT_REGION, DEFAULT_TABLE};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Managed engine table (credentials from the environment).
    Aws,
    /// In-memory table, for local development.
    Memory,
}

/// CLI arguments for the ladrilleria server.
#[derive(Parser, Debug)]
#[command(about = "Ladrilleria pedido and contacto API server")]
pub struct CliArgs {
    /// Listen port.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Table holding pedidos and contactos.
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Storage backend.
    #[arg(long, value_enum, default_value_t = Backend::Aws)]
    pub backend: Backend,

    /// Engine region.
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,
}

impl CliArgs {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the server configuration from the parsed arguments.
    pub fn to_config(&self) -> ServerConfig {
        let storage = match self.backend {
            Backend::Memory => StorageConfig::InMemory,
            Backend::Aws => StorageConfig::Aws(AwsTableConfig {
                region: self.region.clone(),
                table: self.table.clone(),
            }),
        };
        ServerConfig {
            port: self.port,
            storage,
        }
    }
}

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port.
    pub port: u16,
    /// Storage backend configuration.
    pub storage: StorageConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            storage: StorageConfig::default(),
        }
    }
}
