use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::{User, UserSummary};
use crate::scheduling::NewUser;
use crate::state::SharedState;

pub async fn add_user(
    State(state): State<SharedState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    tracing::info!("Processing request to add a user");

    let Json(req) = payload.map_err(|e| {
        AppError::BadRequest(format!("Request body must be a JSON object: {}", e.body_text()))
    })?;

    let user = req.into_record(&state.config.tenant_id)?;

    db::users::create(state.store.as_ref(), &state.config.users_container, &user)
        .await
        .map_err(AppError::WriteFailure)?;

    tracing::info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_users(
    State(state): State<SharedState>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    tracing::info!("Processing request to list users");

    let users = db::users::list_summaries(
        state.store.as_ref(),
        &state.config.users_container,
        &state.config.tenant_id,
    )
    .await
    .map_err(AppError::QueryFailure)?;

    Ok(Json(users))
}
