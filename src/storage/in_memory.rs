//! In-memory implementation of the table store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::TableStore;
use crate::attr::{AttributeValue, Item};
use crate::error::{Error, Result};

/// In-memory table keyed by the `id` attribute.
///
/// Stores all items in memory; useful for tests and local development where
/// no engine is reachable. Mirrors the engine's contract: puts are
/// unconditional full overwrites, and the partition key must be a non-empty
/// string attribute.
#[derive(Debug, Default)]
pub struct InMemoryTable {
    items: RwLock<BTreeMap<String, Item>>,
}

impl InMemoryTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    /// True when the table holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extracts the partition key, enforcing the engine's key schema: `id` must
/// be present, a string, and non-empty.
fn partition_key(item: &Item) -> Result<String> {
    match item.get("id") {
        Some(AttributeValue::S(id)) if !id.is_empty() => Ok(id.clone()),
        Some(AttributeValue::S(_)) => Err(Error::Validation(
            "partition key id must not be empty".to_string(),
        )),
        Some(_) => Err(Error::Validation(
            "partition key id must be a string attribute".to_string(),
        )),
        None => Err(Error::Validation(
            "item is missing the partition key id".to_string(),
        )),
    }
}

#[async_trait]
impl TableStore for InMemoryTable {
    async fn put_item(&self, item: Item) -> Result<()> {
        let key = partition_key(&item)?;
        let mut items = self
            .items
            .write()
            .map_err(|e| Error::Internal(format!("failed to acquire write lock: {}", e)))?;
        items.insert(key, item);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Item>> {
        let items = self
            .items
            .read()
            .map_err(|e| Error::Internal(format!("failed to acquire read lock: {}", e)))?;
        Ok(items.values().cloned().collect())
    }
}
