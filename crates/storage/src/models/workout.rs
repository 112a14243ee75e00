use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Workout row without its exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: i64,
    pub date: String,
    /// Minutes
    pub duration: i64,
    pub notes: Option<String>,
}
