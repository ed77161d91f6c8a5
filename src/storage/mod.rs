//! Storage adapter for the shared item table.
//!
//! The table is the sole owner of persisted state: the service keeps no
//! in-memory copy of records across requests, only a long-lived handle to
//! the backend. Two implementations exist: [`DynamoTable`] against the
//! managed engine, and [`InMemoryTable`] for tests and local runs.

pub mod config;
pub mod dynamo;
pub mod in_memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::attr::Item;
use crate::error::Result;

pub use config::{AwsTableConfig, StorageConfig};
pub use dynamo::DynamoTable;
pub use in_memory::InMemoryTable;

/// A table of items keyed by their `id` attribute.
///
/// All methods take `&self`; a single instance is shared across request
/// tasks behind an `Arc`. Each operation is stateless and independent.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Writes an item, fully replacing any existing item with the same `id`.
    ///
    /// The write is unconditional: no concurrency check, no merge. Two
    /// racing writes to the same `id` resolve to whichever completes last
    /// at the engine.
    ///
    /// # Errors
    ///
    /// Returns an error on any engine-side rejection (throughput exceeded,
    /// malformed item, connectivity failure, authorization failure).
    async fn put_item(&self, item: Item) -> Result<()>;

    /// Reads every item currently in the table, in no particular order.
    ///
    /// Only the first page returned by the engine is read; a continuation
    /// token is not followed, so collections larger than one scan page are
    /// silently truncated. Known bound, logged at debug level.
    ///
    /// # Errors
    ///
    /// Returns an error on any engine-side rejection.
    async fn scan(&self) -> Result<Vec<Item>>;
}

/// Creates a table store from configuration.
///
/// The returned handle holds the backend connection and credentials for the
/// lifetime of the process; callers construct it once at startup and inject
/// it into the server.
pub async fn create_table_store(config: &StorageConfig) -> Result<Arc<dyn TableStore>> {
    match config {
        StorageConfig::InMemory => Ok(Arc::new(InMemoryTable::new())),
        StorageConfig::Aws(aws) => Ok(Arc::new(DynamoTable::connect(aws).await?)),
    }
}
