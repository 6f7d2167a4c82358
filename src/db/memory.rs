use std::collections::HashSet;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use super::{DocumentQuery, DocumentStore, StoreError, document_id};

struct StoredDocument {
    partition_key: String,
    body: Value,
}

#[derive(Default)]
struct Container {
    /// (partition_key, id) of every stored document
    keys: HashSet<(String, String)>,
    documents: Vec<StoredDocument>,
}

/// Process-local document store. Containers are created on first write.
#[derive(Default)]
pub struct MemoryDocumentStore {
    /// container name -> documents in insertion order
    containers: DashMap<String, Container>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            containers: DashMap::new(),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create(
        &self,
        container: &str,
        partition_key: &str,
        document: &Value,
    ) -> Result<(), StoreError> {
        let id = document_id(document)?;

        let mut entry = self.containers.entry(container.to_string()).or_default();
        if !entry
            .keys
            .insert((partition_key.to_string(), id.to_string()))
        {
            return Err(StoreError::Conflict {
                message: format!("document '{id}' already exists in '{container}'"),
                code: None,
            });
        }

        entry.documents.push(StoredDocument {
            partition_key: partition_key.to_string(),
            body: document.clone(),
        });
        Ok(())
    }

    async fn query(&self, container: &str, query: &DocumentQuery) -> Result<Vec<Value>, StoreError> {
        let Some(entry) = self.containers.get(container) else {
            return Ok(Vec::new());
        };

        Ok(entry
            .documents
            .iter()
            .filter(|d| query.matches(&d.partition_key, &d.body))
            .map(|d| d.body.clone())
            .collect())
    }
}
