//! Persistence gateway over a partitioned JSON document store.

pub mod appointments;
pub mod memory;
pub mod postgres;
pub mod users;

use async_trait::async_trait;
use serde_json::Value;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Create/query access to containers of JSON documents. Each document has a
/// string `id` and is written under a partition key; `(container, partition
/// key, id)` is unique.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create(
        &self,
        container: &str,
        partition_key: &str,
        document: &Value,
    ) -> Result<(), StoreError>;

    /// Documents matching every filter, in insertion order.
    async fn query(&self, container: &str, query: &DocumentQuery) -> Result<Vec<Value>, StoreError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartitionScope {
    Partition(String),
    CrossPartition,
}

/// Top-level field equality filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentQuery {
    pub filters: Vec<FieldFilter>,
    pub scope: PartitionScope,
}

impl DocumentQuery {
    pub fn in_partition(partition_key: &str) -> Self {
        DocumentQuery {
            filters: Vec::new(),
            scope: PartitionScope::Partition(partition_key.to_string()),
        }
    }

    pub fn cross_partition() -> Self {
        DocumentQuery {
            filters: Vec::new(),
            scope: PartitionScope::CrossPartition,
        }
    }

    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(FieldFilter {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn matches(&self, partition_key: &str, document: &Value) -> bool {
        if let PartitionScope::Partition(key) = &self.scope {
            if key != partition_key {
                return false;
            }
        }
        self.filters
            .iter()
            .all(|f| document.get(&f.field) == Some(&f.value))
    }
}

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Conflict { message: String, code: Option<String> },
    InvalidDocument(String),
    Codec(serde_json::Error),
}

impl StoreError {
    /// Backend-provided status code, when the backend reported one.
    pub fn code(&self) -> Option<String> {
        match self {
            StoreError::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().map(|c| c.into_owned())
            }
            StoreError::Conflict { code, .. } => code.clone(),
            _ => None,
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "Database error: {err}"),
            StoreError::Conflict { message, .. } => write!(f, "Conflict: {message}"),
            StoreError::InvalidDocument(msg) => write!(f, "Invalid document: {msg}"),
            StoreError::Codec(err) => write!(f, "Document codec error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict {
                    message: db_err.message().to_string(),
                    code: db_err.code().map(|c| c.into_owned()),
                }
            }
            _ => StoreError::Database(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Codec(err)
    }
}

/// The `id` of a document about to be written.
pub(crate) fn document_id(document: &Value) -> Result<&str, StoreError> {
    document
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| StoreError::InvalidDocument("missing string 'id'".to_string()))
}
