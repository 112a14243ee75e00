use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::measurement::BodyMeasurementRequest, models::BodyMeasurement};
use storage::repository::measurement::ENTITY;
use validator::Validate;

use crate::error::WebResult;
use crate::extract::{AppJson, AppPath, record_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/measurements",
    responses(
        (status = 200, description = "All body measurements, most recent date first", body = Vec<BodyMeasurement>)
    ),
    tag = "measurements"
)]
pub async fn list_measurements(
    State(db): State<Database>,
) -> WebResult<Json<Vec<BodyMeasurement>>> {
    let measurements = services::list_measurements(&db).await?;

    Ok(Json(measurements))
}

#[utoipa::path(
    post,
    path = "/api/measurements",
    request_body = BodyMeasurementRequest,
    responses(
        (status = 201, description = "Body measurement created", body = BodyMeasurement),
        (status = 400, description = "Date and all measurements are required")
    ),
    tag = "measurements"
)]
pub async fn create_measurement(
    State(db): State<Database>,
    AppJson(req): AppJson<BodyMeasurementRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let measurement = services::create_measurement(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(measurement)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/measurements/{id}",
    params(
        ("id" = i64, Path, description = "Body measurement id")
    ),
    request_body = BodyMeasurementRequest,
    responses(
        (status = 200, description = "Body measurement replaced", body = BodyMeasurement),
        (status = 400, description = "Date and all measurements are required"),
        (status = 404, description = "Body measurement not found")
    ),
    tag = "measurements"
)]
pub async fn update_measurement(
    State(db): State<Database>,
    AppPath(id): AppPath<String>,
    AppJson(req): AppJson<BodyMeasurementRequest>,
) -> WebResult<Json<BodyMeasurement>> {
    req.validate()?;
    let id = record_id(&id, ENTITY)?;

    let measurement = services::update_measurement(&db, id, &req).await?;

    Ok(Json(measurement))
}

#[utoipa::path(
    delete,
    path = "/api/measurements/{id}",
    params(
        ("id" = i64, Path, description = "Body measurement id")
    ),
    responses(
        (status = 204, description = "Body measurement deleted"),
        (status = 404, description = "Body measurement not found")
    ),
    tag = "measurements"
)]
pub async fn delete_measurement(
    State(db): State<Database>,
    AppPath(id): AppPath<String>,
) -> WebResult<StatusCode> {
    let id = record_id(&id, ENTITY)?;

    services::delete_measurement(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
