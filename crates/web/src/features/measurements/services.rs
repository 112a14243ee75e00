use storage::{
    Database, dto::measurement::BodyMeasurementRequest, error::Result, models::BodyMeasurement,
    repository::measurement::MeasurementRepository,
};

/// List all body measurements
pub async fn list_measurements(db: &Database) -> Result<Vec<BodyMeasurement>> {
    let repo = MeasurementRepository::new(db);
    repo.list().await
}

/// Create a body measurement
pub async fn create_measurement(
    db: &Database,
    request: &BodyMeasurementRequest,
) -> Result<BodyMeasurement> {
    let repo = MeasurementRepository::new(db);
    let measurement = repo.create(request).await?;
    tracing::info!(id = measurement.id, date = %measurement.date, "Body measurement created");
    Ok(measurement)
}

/// Replace a body measurement
pub async fn update_measurement(
    db: &Database,
    id: i64,
    request: &BodyMeasurementRequest,
) -> Result<BodyMeasurement> {
    let repo = MeasurementRepository::new(db);
    repo.update(id, request).await
}

/// Delete a body measurement
pub async fn delete_measurement(db: &Database, id: i64) -> Result<()> {
    let repo = MeasurementRepository::new(db);
    repo.delete(id).await
}
