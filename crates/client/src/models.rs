//! Application-side records: calendar dates instead of strings and body
//! measurements grouped together. Conversions to and from the wire records
//! live here.

use chrono::NaiveDate;

use crate::api::models::{
    ApiBodyMeasurement, ApiExercise, ApiWeightEntry, ApiWorkout, BodyMeasurementPayload,
    ExercisePayload, ExerciseType, WeightEntryPayload, WorkoutPayload,
};
use crate::error::{ClientError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ClientError::InvalidDate(value.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub weight: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWeightEntry {
    pub date: NaiveDate,
    pub weight: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub arms: f64,
    pub legs: f64,
    pub abdomen: f64,
    pub torso: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyMeasurement {
    pub id: i64,
    pub date: NaiveDate,
    pub measurements: Measurements,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBodyMeasurement {
    pub date: NaiveDate,
    pub measurements: Measurements,
    pub notes: Option<String>,
}

/// One exercise of a workout. `id` is `None` until the server assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Option<i64>,
    pub name: String,
    pub exercise_type: ExerciseType,
    pub duration: Option<i64>,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub distance: Option<f64>,
    pub calories: Option<i64>,
}

impl Exercise {
    pub fn new(name: impl Into<String>, exercise_type: ExerciseType) -> Self {
        Self {
            id: None,
            name: name.into(),
            exercise_type,
            duration: None,
            sets: None,
            reps: None,
            weight: None,
            distance: None,
            calories: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub duration: i64,
    pub exercises: Vec<Exercise>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub date: NaiveDate,
    pub duration: i64,
    pub exercises: Vec<Exercise>,
    pub notes: Option<String>,
}

impl TryFrom<ApiWeightEntry> for WeightEntry {
    type Error = ClientError;

    fn try_from(entry: ApiWeightEntry) -> Result<Self> {
        Ok(Self {
            id: entry.id,
            date: parse_date(&entry.date)?,
            weight: entry.weight,
            notes: entry.notes,
        })
    }
}

impl From<&NewWeightEntry> for WeightEntryPayload {
    fn from(entry: &NewWeightEntry) -> Self {
        Self {
            date: format_date(entry.date),
            weight: entry.weight,
            notes: entry.notes.clone(),
        }
    }
}

impl TryFrom<ApiBodyMeasurement> for BodyMeasurement {
    type Error = ClientError;

    fn try_from(record: ApiBodyMeasurement) -> Result<Self> {
        Ok(Self {
            id: record.id,
            date: parse_date(&record.date)?,
            measurements: Measurements {
                arms: record.arms,
                legs: record.legs,
                abdomen: record.abdomen,
                torso: record.torso,
            },
            notes: record.notes,
        })
    }
}

impl From<&NewBodyMeasurement> for BodyMeasurementPayload {
    fn from(record: &NewBodyMeasurement) -> Self {
        let Measurements {
            arms,
            legs,
            abdomen,
            torso,
        } = record.measurements;

        Self {
            date: format_date(record.date),
            arms,
            legs,
            abdomen,
            torso,
            notes: record.notes.clone(),
        }
    }
}

impl From<ApiExercise> for Exercise {
    fn from(exercise: ApiExercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
            exercise_type: exercise.exercise_type,
            duration: exercise.duration,
            sets: exercise.sets,
            reps: exercise.reps,
            weight: exercise.weight,
            distance: exercise.distance,
            calories: exercise.calories,
        }
    }
}

impl From<&Exercise> for ExercisePayload {
    fn from(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name.clone(),
            exercise_type: exercise.exercise_type,
            duration: exercise.duration,
            sets: exercise.sets,
            reps: exercise.reps,
            weight: exercise.weight,
            distance: exercise.distance,
            calories: exercise.calories,
        }
    }
}

impl TryFrom<ApiWorkout> for WorkoutEntry {
    type Error = ClientError;

    fn try_from(workout: ApiWorkout) -> Result<Self> {
        Ok(Self {
            id: workout.id,
            date: parse_date(&workout.date)?,
            duration: workout.duration,
            exercises: workout.exercises.into_iter().map(Exercise::from).collect(),
            notes: workout.notes,
        })
    }
}

impl From<&NewWorkout> for WorkoutPayload {
    fn from(workout: &NewWorkout) -> Self {
        Self {
            date: format_date(workout.date),
            duration: workout.duration,
            notes: workout.notes.clone(),
            exercises: workout.exercises.iter().map(ExercisePayload::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurements_are_grouped_on_read() {
        let record = ApiBodyMeasurement {
            id: 4,
            date: "2024-02-01".to_string(),
            arms: 35.0,
            legs: 58.0,
            abdomen: 85.0,
            torso: 101.0,
            notes: None,
        };

        let converted = BodyMeasurement::try_from(record).unwrap();

        assert_eq!(converted.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(converted.measurements.abdomen, 85.0);
        assert_eq!(converted.measurements.torso, 101.0);
    }

    #[test]
    fn test_payload_date_is_calendar_day() {
        let entry = NewWeightEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            weight: 80.4,
            notes: None,
        };

        let payload = WeightEntryPayload::from(&entry);

        assert_eq!(payload.date, "2024-01-05");
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_invalid_server_date_is_reported() {
        let entry = ApiWeightEntry {
            id: 1,
            date: "05/01/2024".to_string(),
            weight: 80.0,
            notes: None,
        };

        let err = WeightEntry::try_from(entry).unwrap_err();

        assert!(matches!(err, ClientError::InvalidDate(ref d) if d == "05/01/2024"));
    }

    #[test]
    fn test_workout_payload_drops_exercise_ids() {
        let mut squat = Exercise::new("Squat", ExerciseType::Strength);
        squat.id = Some(12);
        squat.sets = Some(5);
        let workout = NewWorkout {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            duration: 60,
            exercises: vec![squat],
            notes: Some("legs".to_string()),
        };

        let json = serde_json::to_value(WorkoutPayload::from(&workout)).unwrap();

        assert_eq!(json["exercises"][0]["type"], "strength");
        assert_eq!(json["exercises"][0]["sets"], 5);
        assert!(json["exercises"][0].get("id").is_none());
        assert!(json["exercises"][0].get("reps").is_none());
    }
}
