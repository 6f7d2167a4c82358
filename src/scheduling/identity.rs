use uuid::Uuid;

/// Fresh random (v4) identifier. Called once per created record.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}
