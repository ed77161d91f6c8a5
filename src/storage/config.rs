//! Storage backend configuration.

/// Name of the single table holding both pedidos and contactos.
pub const DEFAULT_TABLE: &str = "ladrilleria";

/// Engine region used when none is configured.
pub const DEFAULT_REGION: &str = "sa-east-1";

/// Storage backend configuration.
///
/// Credentials are never carried here: the engine client reads
/// `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` from the environment
/// once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// In-memory table, for tests and local development.
    InMemory,
    /// Managed engine table reached over the network.
    Aws(AwsTableConfig),
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Aws(AwsTableConfig::default())
    }
}

/// Settings for the managed engine backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsTableConfig {
    /// Engine region.
    pub region: String,
    /// Table name.
    pub table: String,
}

impl Default for AwsTableConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}
