use crate::db::{Database, SqlParam};
use crate::dto::common::notes_or_null;
use crate::dto::measurement::BodyMeasurementRequest;
use crate::error::{Result, StorageError};
use crate::models::BodyMeasurement;

pub const ENTITY: &str = "Body measurement";

pub struct MeasurementRepository<'a> {
    db: &'a Database,
}

impl<'a> MeasurementRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<BodyMeasurement>> {
        self.db
            .fetch_all(
                r#"
                SELECT id, date, arms, legs, abdomen, torso, notes
                FROM body_measurements
                ORDER BY date DESC
                "#,
                &[],
            )
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<BodyMeasurement> {
        self.db
            .fetch_optional(
                r#"
                SELECT id, date, arms, legs, abdomen, torso, notes
                FROM body_measurements
                WHERE id = ?
                "#,
                &[id.into()],
            )
            .await?
            .ok_or(StorageError::NotFound(ENTITY))
    }

    pub async fn create(&self, req: &BodyMeasurementRequest) -> Result<BodyMeasurement> {
        let outcome = self
            .db
            .execute(
                r#"
                INSERT INTO body_measurements (date, arms, legs, abdomen, torso, notes)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
                &bind_measurement(req),
            )
            .await?;

        self.find_by_id(outcome.last_insert_id).await
    }

    pub async fn update(&self, id: i64, req: &BodyMeasurementRequest) -> Result<BodyMeasurement> {
        let mut params = bind_measurement(req);
        params.push(id.into());

        let outcome = self
            .db
            .execute(
                r#"
                UPDATE body_measurements
                SET date = ?, arms = ?, legs = ?, abdomen = ?, torso = ?, notes = ?
                WHERE id = ?
                "#,
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
            .execute("DELETE FROM body_measurements WHERE id = ?", &[id.into()])
            .await?;

        if outcome.rows_affected == 0 {
            return Err(StorageError::NotFound(ENTITY));
        }

        Ok(())
    }
}

fn bind_measurement(req: &BodyMeasurementRequest) -> Vec<SqlParam> {
    vec![
        req.date.clone().into(),
        req.arms.into(),
        req.legs.into(),
        req.abdomen.into(),
        req.torso.into(),
        notes_or_null(&req.notes).into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(date: &str) -> BodyMeasurementRequest {
        BodyMeasurementRequest {
            date: Some(date.to_string()),
            arms: Some(34.5),
            legs: Some(57.0),
            abdomen: Some(86.0),
            torso: Some(100.5),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_round_trips_all_measurements() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = MeasurementRepository::new(&db);

        let created = repo.create(&measurement("2024-02-01")).await.unwrap();

        assert_eq!(created.arms, 34.5);
        assert_eq!(created.legs, 57.0);
        assert_eq!(created.abdomen, 86.0);
        assert_eq!(created.torso, 100.5);
        assert_eq!(repo.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = MeasurementRepository::new(&db);

        assert!(matches!(
            repo.update(9, &measurement("2024-02-01")).await,
            Err(StorageError::NotFound(ENTITY))
        ));
        assert!(matches!(
            repo.delete(9).await,
            Err(StorageError::NotFound(ENTITY))
        ));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_existing_measurement() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = MeasurementRepository::new(&db);
        let created = repo.create(&measurement("2024-02-01")).await.unwrap();

        let mut req = measurement("2024-02-15");
        req.abdomen = Some(84.0);
        req.notes = Some("after cut".to_string());
        let updated = repo.update(created.id, &req).await.unwrap();

        assert_eq!(updated.abdomen, 84.0);
        assert_eq!(updated.date, "2024-02-15");
        assert_eq!(updated.notes.as_deref(), Some("after cut"));
    }
}
