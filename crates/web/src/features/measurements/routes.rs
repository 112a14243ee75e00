use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{
    create_measurement, delete_measurement, list_measurements, update_measurement,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_measurements).post(create_measurement))
        .route("/:id", put(update_measurement).delete(delete_measurement))
}
