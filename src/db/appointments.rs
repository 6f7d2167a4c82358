use serde_json::Value;

use super::{DocumentQuery, DocumentStore, StoreError};
use crate::models::Appointment;

pub async fn create(
    store: &dyn DocumentStore,
    container: &str,
    appointment: &Appointment,
) -> Result<(), StoreError> {
    let document = serde_json::to_value(appointment)?;
    store
        .create(container, &appointment.tenant_id, &document)
        .await
}

/// Every stored appointment for `user_id`, returned as stored. The query
/// spans all partitions since it filters on `user_id`, not the partition key.
pub async fn list_by_user(
    store: &dyn DocumentStore,
    container: &str,
    user_id: &str,
) -> Result<Vec<Value>, StoreError> {
    store
        .query(
            container,
            &DocumentQuery::cross_partition().where_eq("user_id", user_id),
        )
        .await
}
