pub mod measurement;
pub mod weight;
pub mod workout;
