use crate::models::{Availability, Weekday};

pub const DEFAULT_START_TIME: &str = "08:00";
pub const DEFAULT_END_TIME: &str = "16:00";

/// Weekly template assigned to every new user: Monday to Friday, 08:00-16:00.
///
/// Only applied at creation. Appointment times are not checked against it.
pub fn default_availability() -> Availability {
    Availability {
        days: vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ],
        start_time: DEFAULT_START_TIME.to_string(),
        end_time: DEFAULT_END_TIME.to_string(),
    }
}
