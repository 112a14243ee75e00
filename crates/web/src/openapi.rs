use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::handlers::health,
        features::weight::handlers::list_entries,
        features::weight::handlers::create_entry,
        features::weight::handlers::update_entry,
        features::weight::handlers::delete_entry,
        features::measurements::handlers::list_measurements,
        features::measurements::handlers::create_measurement,
        features::measurements::handlers::update_measurement,
        features::measurements::handlers::delete_measurement,
        features::workouts::handlers::list_workouts,
        features::workouts::handlers::get_workout,
        features::workouts::handlers::create_workout,
        features::workouts::handlers::update_workout,
        features::workouts::handlers::delete_workout,
    ),
    components(
        schemas(
            features::health::handlers::HealthResponse,
            storage::dto::weight::WeightEntryRequest,
            storage::dto::measurement::BodyMeasurementRequest,
            storage::dto::workout::WorkoutRequest,
            storage::dto::workout::ExerciseRequest,
            storage::dto::workout::WorkoutResponse,
            storage::models::WeightEntry,
            storage::models::BodyMeasurement,
            storage::models::Workout,
            storage::models::Exercise,
            storage::models::ExerciseType,
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "weight", description = "Body weight entries"),
        (name = "measurements", description = "Body measurements"),
        (name = "workouts", description = "Workouts and their exercises"),
    )
)]
pub struct ApiDoc;
