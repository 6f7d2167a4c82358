use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::{DocumentQuery, DocumentStore, PartitionScope, StoreError, document_id};

/// Document store backed by the `documents` table (JSONB bodies).
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create(
        &self,
        container: &str,
        partition_key: &str,
        document: &Value,
    ) -> Result<(), StoreError> {
        let id = document_id(document)?;

        sqlx::query(
            "INSERT INTO documents (container, partition_key, id, body) VALUES ($1, $2, $3, $4)",
        )
        .bind(container)
        .bind(partition_key)
        .bind(id)
        .bind(document)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn query(&self, container: &str, query: &DocumentQuery) -> Result<Vec<Value>, StoreError> {
        let sql = build_select(query);

        let mut q = sqlx::query_scalar::<_, Value>(&sql).bind(container);
        if let PartitionScope::Partition(key) = &query.scope {
            q = q.bind(key.as_str());
        }
        for filter in &query.filters {
            q = q.bind(filter.field.as_str()).bind(&filter.value);
        }

        Ok(q.fetch_all(&self.pool).await?)
    }
}

fn build_select(query: &DocumentQuery) -> String {
    let mut sql = String::from("SELECT body FROM documents WHERE container = $1");
    let mut next = 2;

    if let PartitionScope::Partition(_) = query.scope {
        sql.push_str(&format!(" AND partition_key = ${next}"));
        next += 1;
    }
    for _ in &query.filters {
        sql.push_str(&format!(" AND body -> ${} = ${}", next, next + 1));
        next += 2;
    }

    sql.push_str(" ORDER BY seq");
    sql
}
