use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Body circumferences taken on the same day, in centimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BodyMeasurement {
    pub id: i64,
    pub date: String,
    pub arms: f64,
    pub legs: f64,
    pub abdomen: f64,
    pub torso: f64,
    pub notes: Option<String>,
}
