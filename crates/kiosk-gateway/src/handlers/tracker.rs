use crate::error::{AppError, Result};
use crate::extract::JsonOrForm;
use crate::model::{CreateUserRequest, ExerciseRequest};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use kiosk_tracker::{ExerciseEntry, ExerciseLog, LogQuery, User};

pub async fn create_user_handler(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateUserRequest>,
) -> Result<Json<User>> {
    let username = request
        .username
        .ok_or_else(|| AppError::invalid("username is required"))?;
    Ok(Json(state.tracker().create_user(&username)?))
}

pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.tracker().users())
}

pub async fn add_exercise_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonOrForm(request): JsonOrForm<ExerciseRequest>,
) -> Result<Json<ExerciseEntry>> {
    let entry = state.tracker().add_exercise(&user_id, request.into())?;
    Ok(Json(entry))
}

pub async fn exercise_log_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<ExerciseLog>> {
    Ok(Json(state.tracker().log(&user_id, &query)?))
}
