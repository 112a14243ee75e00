use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{create_entry, delete_entry, list_entries, update_entry};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route("/:id", put(update_entry).delete(delete_entry))
}
