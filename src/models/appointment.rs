use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    /// Weak reference to `User::id`; never checked against stored users.
    pub user_id: String,
    pub client_name: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub tenant_id: String,
}
