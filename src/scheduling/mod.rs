//! Record construction and validation for users and appointments.
//!
//! Everything here is pure value construction: nothing touches the document
//! store, so callers can validate a request fully before persisting it.

pub mod availability;
pub mod identity;
pub mod records;
pub mod window;

pub use availability::default_availability;
pub use identity::new_id;
pub use records::{NewAppointment, NewUser, build_appointment, build_user};
pub use window::{TimeWindow, compute_end};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingField(&'static str),
    MalformedTimestamp(String),
    InvalidDuration(i64),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "Missing required field '{field}'")
            }
            ValidationError::MalformedTimestamp(value) => write!(
                f,
                "Invalid 'start_time' value '{value}': expected an ISO 8601 date-time"
            ),
            ValidationError::InvalidDuration(minutes) => write!(
                f,
                "Invalid 'duration_minutes' value {minutes}: must be between {} and {}",
                window::MIN_DURATION_MINUTES,
                window::MAX_DURATION_MINUTES
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
