pub mod body_measurement;
pub mod exercise;
pub mod weight_entry;
pub mod workout;

pub use body_measurement::BodyMeasurement;
pub use exercise::{Exercise, ExerciseType};
pub use weight_entry::WeightEntry;
pub use workout::Workout;
