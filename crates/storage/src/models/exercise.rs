use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::SqlParam;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Cardio,
    Strength,
    Flexibility,
    Other,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Cardio => "cardio",
            ExerciseType::Strength => "strength",
            ExerciseType::Flexibility => "flexibility",
            ExerciseType::Other => "other",
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown exercise type: {0}")]
pub struct UnknownExerciseType(pub String);

impl TryFrom<String> for ExerciseType {
    type Error = UnknownExerciseType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "cardio" => Ok(ExerciseType::Cardio),
            "strength" => Ok(ExerciseType::Strength),
            "flexibility" => Ok(ExerciseType::Flexibility),
            "other" => Ok(ExerciseType::Other),
            _ => Err(UnknownExerciseType(value)),
        }
    }
}

impl From<ExerciseType> for SqlParam {
    fn from(value: ExerciseType) -> Self {
        SqlParam::from(value.as_str())
    }
}

/// An exercise performed as part of a workout. Every metric is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exercise {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub exercise_type: ExerciseType,
    pub duration: Option<i64>,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub distance: Option<f64>,
    pub calories: Option<i64>,
}
