use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use client::{
    ApiClient, BodyMeasurements, DEFAULT_BASE_URL, Dashboard, WeightEntries, Workouts,
    api::ExerciseType,
    models::{Exercise, Measurements, NewBodyMeasurement, NewWeightEntry, NewWorkout},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fitness")]
#[command(about = "Fitness tracker command-line client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "FITNESS_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API is up
    Health,
    /// Latest figures and 30-day activity
    Dashboard,
    Weight {
        #[command(subcommand)]
        action: WeightAction,
    },
    Measurements {
        #[command(subcommand)]
        action: MeasurementAction,
    },
    Workouts {
        #[command(subcommand)]
        action: WorkoutAction,
    },
}

#[derive(Subcommand)]
enum WeightAction {
    List,
    Add {
        #[arg(long)]
        weight: f64,

        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        notes: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum MeasurementAction {
    List,
    Add {
        #[arg(long)]
        arms: f64,

        #[arg(long)]
        legs: f64,

        #[arg(long)]
        abdomen: f64,

        #[arg(long)]
        torso: f64,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        notes: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum WorkoutAction {
    List,
    Add {
        /// Session length in minutes
        #[arg(long)]
        duration: i64,

        /// NAME:TYPE[:key=value,...], e.g. "Squat:strength:sets=5,reps=5,weight=100"
        #[arg(long = "exercise", value_parser = parse_exercise)]
        exercises: Vec<Exercise>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        notes: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fitness={},client={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api = ApiClient::new(cli.api_url);
    tracing::debug!("Using API at {}", api.base_url());

    match cli.command {
        Commands::Health => {
            let health = api.health().await.context("Health check failed")?;
            println!("{} ({})", health.status, health.timestamp);
        }
        Commands::Dashboard => show_dashboard(api).await?,
        Commands::Weight { action } => handle_weight(api, action).await?,
        Commands::Measurements { action } => handle_measurements(api, action).await?,
        Commands::Workouts { action } => handle_workouts(api, action).await?,
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn show_dashboard(api: ApiClient) -> anyhow::Result<()> {
    let weights = WeightEntries::load(api.clone()).await;
    let measurements = BodyMeasurements::load(api.clone()).await;
    let workouts = Workouts::load(api).await;

    if let Some(error) = [weights.error(), measurements.error(), workouts.error()]
        .into_iter()
        .flatten()
        .next()
    {
        anyhow::bail!("Failed to load dashboard data: {}", error);
    }

    let dashboard = Dashboard::build(
        weights.items(),
        measurements.items(),
        workouts.items(),
        today(),
    );

    match dashboard.latest_weight {
        Some(entry) => {
            print!("Current weight: {} kg ({})", entry.weight, entry.date);
            if let Some(change) = dashboard.weight_change {
                print!(" {:+.1} kg", change);
            }
            println!();
        }
        None => println!("No weight entries"),
    }

    match dashboard.latest_measurement {
        Some(record) => {
            let m = record.measurements;
            println!(
                "Latest measurements ({}): arms {} cm, legs {} cm, abdomen {} cm, torso {} cm",
                record.date, m.arms, m.legs, m.abdomen, m.torso
            );
        }
        None => println!("No body measurements"),
    }

    println!(
        "Last 30 days: {} workouts, {} min total",
        dashboard.recent_workouts.len(),
        dashboard.recent_minutes
    );
    if let Some(average) = dashboard.average_minutes {
        println!("Average: {} min/session", average);
    }

    println!(
        "Totals: {} weight entries, {} measurements, {} workouts",
        dashboard.weight_entry_count, dashboard.measurement_count, dashboard.workout_count
    );

    for workout in dashboard.recent_workouts.iter().take(3) {
        println!(
            "  {}  {} exercises - {} min",
            workout.date,
            workout.exercises.len(),
            workout.duration
        );
    }

    Ok(())
}

async fn handle_weight(api: ApiClient, action: WeightAction) -> anyhow::Result<()> {
    match action {
        WeightAction::List => {
            let store = WeightEntries::load(api).await;
            if let Some(error) = store.error() {
                anyhow::bail!("Failed to load weight entries: {}", error);
            }
            for entry in store.items() {
                println!(
                    "#{:<5} {}  {:>6.1} kg  {}",
                    entry.id,
                    entry.date,
                    entry.weight,
                    entry.notes.as_deref().unwrap_or("")
                );
            }
        }
        WeightAction::Add {
            weight,
            date,
            notes,
        } => {
            let mut store = WeightEntries::new(api);
            let entry = store
                .add(&NewWeightEntry {
                    date: date.unwrap_or_else(today),
                    weight,
                    notes,
                })
                .await
                .context("Failed to create weight entry")?;
            println!("Created weight entry #{}", entry.id);
        }
        WeightAction::Delete { id } => {
            api.delete_weight_entry(id)
                .await
                .with_context(|| format!("Failed to delete weight entry #{}", id))?;
            println!("Deleted weight entry #{}", id);
        }
    }

    Ok(())
}

async fn handle_measurements(api: ApiClient, action: MeasurementAction) -> anyhow::Result<()> {
    match action {
        MeasurementAction::List => {
            let store = BodyMeasurements::load(api).await;
            if let Some(error) = store.error() {
                anyhow::bail!("Failed to load body measurements: {}", error);
            }
            for record in store.items() {
                let m = record.measurements;
                println!(
                    "#{:<5} {}  arms {}  legs {}  abdomen {}  torso {}  {}",
                    record.id,
                    record.date,
                    m.arms,
                    m.legs,
                    m.abdomen,
                    m.torso,
                    record.notes.as_deref().unwrap_or("")
                );
            }
        }
        MeasurementAction::Add {
            arms,
            legs,
            abdomen,
            torso,
            date,
            notes,
        } => {
            let mut store = BodyMeasurements::new(api);
            let record = store
                .add(&NewBodyMeasurement {
                    date: date.unwrap_or_else(today),
                    measurements: Measurements {
                        arms,
                        legs,
                        abdomen,
                        torso,
                    },
                    notes,
                })
                .await
                .context("Failed to create body measurement")?;
            println!("Created body measurement #{}", record.id);
        }
        MeasurementAction::Delete { id } => {
            api.delete_body_measurement(id)
                .await
                .with_context(|| format!("Failed to delete body measurement #{}", id))?;
            println!("Deleted body measurement #{}", id);
        }
    }

    Ok(())
}

async fn handle_workouts(api: ApiClient, action: WorkoutAction) -> anyhow::Result<()> {
    match action {
        WorkoutAction::List => {
            let store = Workouts::load(api).await;
            if let Some(error) = store.error() {
                anyhow::bail!("Failed to load workouts: {}", error);
            }
            for workout in store.items() {
                println!(
                    "#{:<5} {}  {} min  {}",
                    workout.id,
                    workout.date,
                    workout.duration,
                    workout.notes.as_deref().unwrap_or("")
                );
                for exercise in &workout.exercises {
                    println!("        - {} ({})", exercise.name, exercise.exercise_type);
                }
            }
        }
        WorkoutAction::Add {
            duration,
            exercises,
            date,
            notes,
        } => {
            let mut store = Workouts::new(api);
            let workout = store
                .add(&NewWorkout {
                    date: date.unwrap_or_else(today),
                    duration,
                    exercises,
                    notes,
                })
                .await
                .context("Failed to create workout")?;
            println!(
                "Created workout #{} with {} exercises",
                workout.id,
                workout.exercises.len()
            );
        }
        WorkoutAction::Delete { id } => {
            api.delete_workout(id)
                .await
                .with_context(|| format!("Failed to delete workout #{}", id))?;
            println!("Deleted workout #{}", id);
        }
    }

    Ok(())
}

fn parse_exercise(value: &str) -> Result<Exercise, String> {
    let mut parts = value.splitn(3, ':');
    let name = parts
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| "exercise name is empty".to_string())?;
    let exercise_type: ExerciseType = parts
        .next()
        .ok_or_else(|| format!("missing exercise type in '{}'", value))?
        .parse()?;

    let mut exercise = Exercise::new(name, exercise_type);

    for metric in parts.next().into_iter().flat_map(|m| m.split(',')) {
        let (key, raw) = metric
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", metric))?;
        let int = || {
            raw.parse::<i64>()
                .map_err(|_| format!("'{}' is not a whole number", raw))
        };
        let real = || {
            raw.parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", raw))
        };

        match key {
            "duration" => exercise.duration = Some(int()?),
            "sets" => exercise.sets = Some(int()?),
            "reps" => exercise.reps = Some(int()?),
            "calories" => exercise.calories = Some(int()?),
            "weight" => exercise.weight = Some(real()?),
            "distance" => exercise.distance = Some(real()?),
            other => return Err(format!("unknown exercise metric '{}'", other)),
        }
    }

    Ok(exercise)
}
