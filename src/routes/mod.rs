pub mod appointments;
pub mod users;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/AddUser", post(users::add_user).options(preflight))
        .route("/GetUsers", get(users::get_users).options(preflight))
        .route(
            "/AddAppointment",
            post(appointments::add_appointment).options(preflight),
        )
        .route(
            "/GetUserAppointments",
            get(appointments::get_user_appointments).options(preflight),
        )
}

/// CORS pre-flight. The allow headers are added to every response by a layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
