use crate::db::{Database, SqlParam};
use crate::dto::common::notes_or_null;
use crate::dto::weight::WeightEntryRequest;
use crate::error::{Result, StorageError};
use crate::models::WeightEntry;

pub const ENTITY: &str = "Weight entry";

pub struct WeightRepository<'a> {
    db: &'a Database,
}

impl<'a> WeightRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all entries, most recent date first
    pub async fn list(&self) -> Result<Vec<WeightEntry>> {
        self.db
            .fetch_all(
                "SELECT id, date, weight, notes FROM weight_entries ORDER BY date DESC",
                &[],
            )
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<WeightEntry> {
        self.db
            .fetch_optional(
                "SELECT id, date, weight, notes FROM weight_entries WHERE id = ?",
                &[id.into()],
            )
            .await?
            .ok_or(StorageError::NotFound(ENTITY))
    }

    /// Insert a validated entry and return the stored row
    pub async fn create(&self, req: &WeightEntryRequest) -> Result<WeightEntry> {
        let outcome = self
            .db
            .execute(
                "INSERT INTO weight_entries (date, weight, notes) VALUES (?, ?, ?)",
                &bind_entry(req),
            )
            .await?;

        self.find_by_id(outcome.last_insert_id).await
    }

    /// Replace every field of an existing entry
    pub async fn update(&self, id: i64, req: &WeightEntryRequest) -> Result<WeightEntry> {
        let mut params = bind_entry(req);
        params.push(id.into());

        let outcome = self
            .db
            .execute(
                "UPDATE weight_entries SET date = ?, weight = ?, notes = ? WHERE id = ?",
                &params,
            )
            .await?;

        if outcome.rows_affected == 0 {
            return Err(StorageError::NotFound(ENTITY));
        }

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let outcome = self
            .db
            .execute("DELETE FROM weight_entries WHERE id = ?", &[id.into()])
            .await?;

        if outcome.rows_affected == 0 {
            return Err(StorageError::NotFound(ENTITY));
        }

        Ok(())
    }
}

fn bind_entry(req: &WeightEntryRequest) -> Vec<SqlParam> {
    vec![
        req.date.clone().into(),
        req.weight.into(),
        notes_or_null(&req.notes).into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, weight: f64) -> WeightEntryRequest {
        WeightEntryRequest {
            date: Some(date.to_string()),
            weight: Some(weight),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_date_descending() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = WeightRepository::new(&db);

        for date in ["2024-01-01", "2024-03-01", "2024-02-01"] {
            repo.create(&entry(date, 80.0)).await.unwrap();
        }

        let dates: Vec<String> = repo.list().await.unwrap().into_iter().map(|e| e.date).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[tokio::test]
    async fn test_created_entry_matches_listed_entry() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = WeightRepository::new(&db);

        let mut req = entry("2024-04-02", 79.4);
        req.notes = Some("morning".to_string());
        let created = repo.create(&req).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.notes.as_deref(), Some("morning"));
    }

    #[tokio::test]
    async fn test_empty_notes_are_stored_as_null() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = WeightRepository::new(&db);

        let mut req = entry("2024-04-02", 79.4);
        req.notes = Some(String::new());
        let created = repo.create(&req).await.unwrap();

        assert!(created.notes.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = WeightRepository::new(&db);
        repo.create(&entry("2024-01-01", 80.0)).await.unwrap();

        let result = repo.update(123, &entry("2024-01-02", 81.0)).await;

        assert!(matches!(result, Err(StorageError::NotFound(ENTITY))));
        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].weight, 80.0);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = WeightRepository::new(&db);
        let mut original = entry("2024-01-01", 80.0);
        original.notes = Some("before".to_string());
        let created = repo.create(&original).await.unwrap();

        let updated = repo
            .update(created.id, &entry("2024-01-05", 78.8))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, "2024-01-05");
        assert_eq!(updated.weight, 78.8);
        assert!(updated.notes.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_table_unchanged() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = WeightRepository::new(&db);
        let created = repo.create(&entry("2024-01-01", 80.0)).await.unwrap();

        assert!(matches!(
            repo.delete(created.id + 1).await,
            Err(StorageError::NotFound(_))
        ));
        assert_eq!(repo.list().await.unwrap().len(), 1);

        repo.delete(created.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
