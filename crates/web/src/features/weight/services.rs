use storage::{
    Database, dto::weight::WeightEntryRequest, error::Result, models::WeightEntry,
    repository::weight::WeightRepository,
};

/// List all weight entries
pub async fn list_entries(db: &Database) -> Result<Vec<WeightEntry>> {
    let repo = WeightRepository::new(db);
    repo.list().await
}

/// Create a weight entry
pub async fn create_entry(db: &Database, request: &WeightEntryRequest) -> Result<WeightEntry> {
    let repo = WeightRepository::new(db);
    let entry = repo.create(request).await?;
    tracing::info!(id = entry.id, date = %entry.date, "Weight entry created");
    Ok(entry)
}

/// Replace a weight entry
pub async fn update_entry(
    db: &Database,
    id: i64,
    request: &WeightEntryRequest,
) -> Result<WeightEntry> {
    let repo = WeightRepository::new(db);
    repo.update(id, request).await
}

/// Delete a weight entry
pub async fn delete_entry(db: &Database, id: i64) -> Result<()> {
    let repo = WeightRepository::new(db);
    repo.delete(id).await
}
