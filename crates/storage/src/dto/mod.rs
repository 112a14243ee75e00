pub mod common;
pub mod measurement;
pub mod weight;
pub mod workout;
