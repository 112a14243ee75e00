use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::common::{is_present, missing_fields, validate_calendar_date};
use crate::models::{Exercise, ExerciseType, Workout};

/// Request payload for creating or replacing a workout together with its exercises
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_workout"))]
pub struct WorkoutRequest {
    pub date: Option<String>,
    /// Minutes
    pub duration: Option<i64>,
    pub notes: Option<String>,
    /// Replaces the whole exercise list of the workout. May be empty.
    pub exercises: Option<Vec<ExerciseRequest>>,
}

/// An exercise inside a workout payload. Zero-valued metrics are stored as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub sets: Option<i64>,
    #[serde(default)]
    pub reps: Option<i64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub calories: Option<i64>,
}

/// Workout with its exercises, as returned by every workout endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: i64,
    pub date: String,
    pub duration: i64,
    pub notes: Option<String>,
    pub exercises: Vec<Exercise>,
}

impl WorkoutResponse {
    pub fn from_parts(workout: Workout, exercises: Vec<Exercise>) -> Self {
        Self {
            id: workout.id,
            date: workout.date,
            duration: workout.duration,
            notes: workout.notes,
            exercises,
        }
    }
}

fn validate_workout(req: &WorkoutRequest) -> Result<(), ValidationError> {
    if !is_present(&req.date) || !is_present(&req.duration) || !is_present(&req.exercises) {
        return Err(missing_fields("Date, duration and exercises are required"));
    }

    match req.date.as_deref() {
        Some(date) => validate_calendar_date(date),
        None => Ok(()),
    }
}
