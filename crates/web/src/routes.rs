use axum::{Router, routing::get};
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{health, measurements, weight, workouts};
use crate::openapi::ApiDoc;

/// Build the full application with `db` injected as shared state.
pub fn app(db: Database) -> Router {
    let api = Router::new()
        .route("/health", get(health::handlers::health))
        .nest("/weight", weight::routes::routes())
        .nest("/measurements", measurements::routes::routes())
        .nest("/workouts", workouts::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .with_state(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
