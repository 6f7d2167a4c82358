use serde::Deserialize;

use super::window::{DEFAULT_DURATION_MINUTES, TimeWindow};
use super::{ValidationError, default_availability, new_id};
use crate::models::{Appointment, User};

/// Body of `POST /AddUser`. Missing fields are reported by `into_record`.
#[derive(Debug, Default, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of `POST /AddAppointment`.
#[derive(Debug, Default, Deserialize)]
pub struct NewAppointment {
    pub user_id: Option<String>,
    pub client_name: Option<String>,
    pub start_time: Option<String>,
    /// Older clients send the start under this name; `start_time` wins.
    pub start_time_iso: Option<String>,
    pub duration_minutes: Option<i64>,
}

impl NewUser {
    pub fn into_record(self, tenant_id: &str) -> Result<User, ValidationError> {
        build_user(self.name.as_deref(), self.email.as_deref(), tenant_id)
    }
}

impl NewAppointment {
    pub fn into_record(self, tenant_id: &str) -> Result<Appointment, ValidationError> {
        let start_time = self
            .start_time
            .filter(|s| !s.is_empty())
            .or(self.start_time_iso);

        build_appointment(
            self.user_id.as_deref(),
            self.client_name.as_deref(),
            start_time.as_deref(),
            self.duration_minutes,
            tenant_id,
        )
    }
}

pub fn build_user(
    name: Option<&str>,
    email: Option<&str>,
    tenant_id: &str,
) -> Result<User, ValidationError> {
    let name = required("name", name)?;
    let email = required("email", email)?;

    Ok(User {
        id: new_id(),
        name: name.to_string(),
        email: email.to_string(),
        availability: default_availability(),
        tenant_id: tenant_id.to_string(),
    })
}

/// Builds an appointment record. The user reference and overlaps with other
/// appointments are not checked.
pub fn build_appointment(
    user_id: Option<&str>,
    client_name: Option<&str>,
    start_time: Option<&str>,
    duration_minutes: Option<i64>,
    tenant_id: &str,
) -> Result<Appointment, ValidationError> {
    let user_id = required("user_id", user_id)?;
    let client_name = required("client_name", client_name)?;
    let start_time = required("start_time", start_time)?;

    let window = TimeWindow::new(
        start_time,
        duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
    )?;

    Ok(Appointment {
        id: new_id(),
        user_id: user_id.to_string(),
        client_name: client_name.to_string(),
        start_time: window.start_rfc3339(),
        end_time: window.end_rfc3339(),
        duration_minutes: window.duration_minutes,
        tenant_id: tenant_id.to_string(),
    })
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}
