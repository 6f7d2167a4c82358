mod appointment;
mod user;

pub use appointment::Appointment;
pub use user::{Availability, User, UserSummary, Weekday};
