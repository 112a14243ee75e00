pub mod health;
pub mod measurements;
pub mod weight;
pub mod workouts;
