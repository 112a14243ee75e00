pub mod client;
pub mod models;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use models::*;
