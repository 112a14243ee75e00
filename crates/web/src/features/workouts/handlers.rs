use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout::{WorkoutRequest, WorkoutResponse},
};
use storage::repository::workout::ENTITY;
use validator::Validate;

use crate::error::WebResult;
use crate::extract::{AppJson, AppPath, record_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    responses(
        (status = 200, description = "All workouts with their exercises, most recent date first", body = Vec<WorkoutResponse>)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(State(db): State<Database>) -> WebResult<Json<Vec<WorkoutResponse>>> {
    let workouts = services::list_workouts(&db).await?;

    Ok(Json(workouts))
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    AppPath(id): AppPath<String>,
) -> WebResult<Json<WorkoutResponse>> {
    let id = record_id(&id, ENTITY)?;

    let workout = services::get_workout(&db, id).await?;

    Ok(Json(workout))
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = WorkoutRequest,
    responses(
        (status = 201, description = "Workout created with its exercises", body = WorkoutResponse),
        (status = 400, description = "Date, duration and exercises are required")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    AppJson(req): AppJson<WorkoutRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let workout = services::create_workout(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(workout)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    request_body = WorkoutRequest,
    responses(
        (status = 200, description = "Workout replaced, exercises recreated", body = WorkoutResponse),
        (status = 400, description = "Date, duration and exercises are required"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    AppPath(id): AppPath<String>,
    AppJson(req): AppJson<WorkoutRequest>,
) -> WebResult<Json<WorkoutResponse>> {
    req.validate()?;
    let id = record_id(&id, ENTITY)?;

    let workout = services::update_workout(&db, id, &req).await?;

    Ok(Json(workout))
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    AppPath(id): AppPath<String>,
) -> WebResult<StatusCode> {
    let id = record_id(&id, ENTITY)?;

    services::delete_workout(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
