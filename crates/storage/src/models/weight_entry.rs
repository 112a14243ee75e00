use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single body weight reading, in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeightEntry {
    pub id: i64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub weight: f64,
    pub notes: Option<String>,
}
