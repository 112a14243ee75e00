use storage::{
    Database,
    dto::workout::{WorkoutRequest, WorkoutResponse},
    error::Result,
    repository::workout::WorkoutRepository,
};

/// List all workouts with their exercises
pub async fn list_workouts(db: &Database) -> Result<Vec<WorkoutResponse>> {
    let repo = WorkoutRepository::new(db);
    repo.list().await
}

/// Get one workout with its exercises
pub async fn get_workout(db: &Database, id: i64) -> Result<WorkoutResponse> {
    let repo = WorkoutRepository::new(db);
    repo.find_by_id(id).await
}

/// Create a workout and its exercises
pub async fn create_workout(db: &Database, request: &WorkoutRequest) -> Result<WorkoutResponse> {
    let repo = WorkoutRepository::new(db);
    let workout = repo.create(request).await?;
    tracing::info!(
        id = workout.id,
        date = %workout.date,
        exercises = workout.exercises.len(),
        "Workout created"
    );
    Ok(workout)
}

/// Replace a workout and its whole exercise list
pub async fn update_workout(
    db: &Database,
    id: i64,
    request: &WorkoutRequest,
) -> Result<WorkoutResponse> {
    let repo = WorkoutRepository::new(db);
    repo.update(id, request).await
}

/// Delete a workout
pub async fn delete_workout(db: &Database, id: i64) -> Result<()> {
    let repo = WorkoutRepository::new(db);
    repo.delete(id).await
}
