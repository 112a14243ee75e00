pub mod api;
pub mod dashboard;
pub mod error;
pub mod hooks;
pub mod models;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, DEFAULT_BASE_URL};
pub use dashboard::Dashboard;
pub use error::{ClientError, Result};
pub use hooks::{BodyMeasurements, WeightEntries, Workouts};
