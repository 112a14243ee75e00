use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::weight::WeightEntryRequest, models::WeightEntry};
use storage::repository::weight::ENTITY;
use validator::Validate;

use crate::error::WebResult;
use crate::extract::{AppJson, AppPath, record_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/weight",
    responses(
        (status = 200, description = "All weight entries, most recent date first", body = Vec<WeightEntry>)
    ),
    tag = "weight"
)]
pub async fn list_entries(State(db): State<Database>) -> WebResult<Json<Vec<WeightEntry>>> {
    let entries = services::list_entries(&db).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    post,
    path = "/api/weight",
    request_body = WeightEntryRequest,
    responses(
        (status = 201, description = "Weight entry created", body = WeightEntry),
        (status = 400, description = "Date and weight are required")
    ),
    tag = "weight"
)]
pub async fn create_entry(
    State(db): State<Database>,
    AppJson(req): AppJson<WeightEntryRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let entry = services::create_entry(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/weight/{id}",
    params(
        ("id" = i64, Path, description = "Weight entry id")
    ),
    request_body = WeightEntryRequest,
    responses(
        (status = 200, description = "Weight entry replaced", body = WeightEntry),
        (status = 400, description = "Date and weight are required"),
        (status = 404, description = "Weight entry not found")
    ),
    tag = "weight"
)]
pub async fn update_entry(
    State(db): State<Database>,
    AppPath(id): AppPath<String>,
    AppJson(req): AppJson<WeightEntryRequest>,
) -> WebResult<Json<WeightEntry>> {
    req.validate()?;
    let id = record_id(&id, ENTITY)?;

    let entry = services::update_entry(&db, id, &req).await?;

    Ok(Json(entry))
}

#[utoipa::path(
    delete,
    path = "/api/weight/{id}",
    params(
        ("id" = i64, Path, description = "Weight entry id")
    ),
    responses(
        (status = 204, description = "Weight entry deleted"),
        (status = 404, description = "Weight entry not found")
    ),
    tag = "weight"
)]
pub async fn delete_entry(
    State(db): State<Database>,
    AppPath(id): AppPath<String>,
) -> WebResult<StatusCode> {
    let id = record_id(&id, ENTITY)?;

    services::delete_entry(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
