use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::Appointment;
use crate::scheduling::NewAppointment;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct UserAppointmentsParams {
    pub user_id: Option<String>,
}

pub async fn add_appointment(
    State(state): State<SharedState>,
    payload: Result<Json<NewAppointment>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    tracing::info!("Processing request to add an appointment");

    let Json(req) = payload.map_err(|e| {
        AppError::BadRequest(format!("Request body must be a JSON object: {}", e.body_text()))
    })?;

    let appointment = req.into_record(&state.config.tenant_id)?;

    db::appointments::create(
        state.store.as_ref(),
        &state.config.appointments_container,
        &appointment,
    )
    .await
    .map_err(AppError::WriteFailure)?;

    tracing::info!(
        appointment_id = %appointment.id,
        user_id = %appointment.user_id,
        "Appointment created"
    );
    Ok((StatusCode::CREATED, Json(appointment)))
}

pub async fn get_user_appointments(
    State(state): State<SharedState>,
    Query(params): Query<UserAppointmentsParams>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let user_id = params
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing query parameter 'user_id'".to_string()))?;

    tracing::info!(user_id = %user_id, "Processing request to list appointments");

    let appointments = db::appointments::list_by_user(
        state.store.as_ref(),
        &state.config.appointments_container,
        &user_id,
    )
    .await
    .map_err(AppError::QueryFailure)?;

    Ok(Json(appointments))
}
