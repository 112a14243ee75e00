use crate::db::{Database, SqlParam, UnitOfWork};
use crate::dto::common::{notes_or_null, truthy_or_null};
use crate::dto::workout::{ExerciseRequest, WorkoutRequest, WorkoutResponse};
use crate::error::{Result, StorageError};
use crate::models::{Exercise, Workout};

pub const ENTITY: &str = "Workout";

const SELECT_EXERCISES: &str = r#"
    SELECT id, workout_id, name, type, duration, sets, reps, weight, distance, calories
    FROM exercises
    WHERE workout_id = ?
    ORDER BY id
"#;

/// Repository for workouts and the exercises they own.
///
/// Exercises are never read or written on their own: they are loaded with
/// their workout and replaced wholesale when the workout is replaced.
pub struct WorkoutRepository<'a> {
    db: &'a Database,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all workouts, most recent first, each with its exercises.
    ///
    /// Exercises are loaded with one query per workout.
    pub async fn list(&self) -> Result<Vec<WorkoutResponse>> {
        let workouts: Vec<Workout> = self
            .db
            .fetch_all(
                "SELECT id, date, duration, notes FROM workouts ORDER BY date DESC",
                &[],
            )
            .await?;

        let mut response = Vec::with_capacity(workouts.len());
        for workout in workouts {
            let exercises = self.exercises_for(workout.id).await?;
            response.push(WorkoutResponse::from_parts(workout, exercises));
        }

        Ok(response)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<WorkoutResponse> {
        let workout: Workout = self
            .db
            .fetch_optional(
                "SELECT id, date, duration, notes FROM workouts WHERE id = ?",
                &[id.into()],
            )
            .await?
            .ok_or(StorageError::NotFound(ENTITY))?;

        let exercises = self.exercises_for(id).await?;

        Ok(WorkoutResponse::from_parts(workout, exercises))
    }

    /// Insert the workout, then each exercise in order, as one unit of work
    pub async fn create(&self, req: &WorkoutRequest) -> Result<WorkoutResponse> {
        let mut uow = self.db.begin().await?;

        let outcome = uow
            .execute(
                "INSERT INTO workouts (date, duration, notes) VALUES (?, ?, ?)",
                &bind_workout(req),
            )
            .await?;
        let workout_id = outcome.last_insert_id;

        let exercises = req.exercises.as_deref().unwrap_or_default();
        insert_exercises(&mut uow, workout_id, exercises).await?;

        uow.commit().await?;
        tracing::debug!(workout_id, exercises = exercises.len(), "Workout created");

        self.find_by_id(workout_id).await
    }

    /// Replace the workout fields and its entire exercise list.
    ///
    /// Existing exercises are deleted and the new list inserted, so an empty
    /// list clears them. Nothing is written when the workout does not exist.
    pub async fn update(&self, id: i64, req: &WorkoutRequest) -> Result<WorkoutResponse> {
        let mut uow = self.db.begin().await?;

        let mut params = bind_workout(req);
        params.push(id.into());
        let outcome = uow
            .execute(
                "UPDATE workouts SET date = ?, duration = ?, notes = ? WHERE id = ?",
                &params,
            )
            .await?;

        if outcome.rows_affected == 0 {
            uow.rollback().await?;
            return Err(StorageError::NotFound(ENTITY));
        }

        let removed = uow
            .execute("DELETE FROM exercises WHERE workout_id = ?", &[id.into()])
            .await?;

        let exercises = req.exercises.as_deref().unwrap_or_default();
        insert_exercises(&mut uow, id, exercises).await?;

        uow.commit().await?;
        tracing::debug!(
            workout_id = id,
            removed = removed.rows_affected,
            inserted = exercises.len(),
            "Workout exercises replaced"
        );

        self.find_by_id(id).await
    }

    /// Delete a workout. Its exercises go with it through the foreign key cascade.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let outcome = self
            .db
            .execute("DELETE FROM workouts WHERE id = ?", &[id.into()])
            .await?;

        if outcome.rows_affected == 0 {
            return Err(StorageError::NotFound(ENTITY));
        }

        Ok(())
    }

    async fn exercises_for(&self, workout_id: i64) -> Result<Vec<Exercise>> {
        self.db
            .fetch_all(SELECT_EXERCISES, &[workout_id.into()])
            .await
    }
}

async fn insert_exercises(
    uow: &mut UnitOfWork,
    workout_id: i64,
    exercises: &[ExerciseRequest],
) -> Result<()> {
    for exercise in exercises {
        uow.execute(
            r#"
            INSERT INTO exercises
                (workout_id, name, type, duration, sets, reps, weight, distance, calories)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            &bind_exercise(workout_id, exercise),
        )
        .await?;
    }

    Ok(())
}

fn bind_workout(req: &WorkoutRequest) -> Vec<SqlParam> {
    vec![
        req.date.clone().into(),
        req.duration.into(),
        notes_or_null(&req.notes).into(),
    ]
}

fn bind_exercise(workout_id: i64, exercise: &ExerciseRequest) -> Vec<SqlParam> {
    vec![
        workout_id.into(),
        exercise.name.clone().into(),
        exercise.exercise_type.into(),
        truthy_or_null(&exercise.duration).into(),
        truthy_or_null(&exercise.sets).into(),
        truthy_or_null(&exercise.reps).into(),
        truthy_or_null(&exercise.weight).into(),
        truthy_or_null(&exercise.distance).into(),
        truthy_or_null(&exercise.calories).into(),
    ]
}
