use serde_json::Value;

use super::{DocumentQuery, DocumentStore, StoreError};
use crate::models::{User, UserSummary};

pub async fn create(
    store: &dyn DocumentStore,
    container: &str,
    user: &User,
) -> Result<(), StoreError> {
    let document = serde_json::to_value(user)?;
    store.create(container, &user.tenant_id, &document).await
}

/// All users in the tenant partition that carry a non-empty name, reduced to
/// `{id, name}`.
pub async fn list_summaries(
    store: &dyn DocumentStore,
    container: &str,
    tenant_id: &str,
) -> Result<Vec<UserSummary>, StoreError> {
    let documents = store
        .query(container, &DocumentQuery::in_partition(tenant_id))
        .await?;
    Ok(summarize(&documents))
}

pub fn summarize(documents: &[Value]) -> Vec<UserSummary> {
    documents
        .iter()
        .filter_map(|doc| {
            let name = doc.get("name").and_then(Value::as_str)?;
            if name.is_empty() {
                return None;
            }
            let id = doc.get("id").and_then(Value::as_str)?;
            Some(UserSummary {
                id: id.to_string(),
                name: name.to_string(),
            })
        })
        .collect()
}
