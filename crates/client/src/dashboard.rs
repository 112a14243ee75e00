//! Summary figures shown on the dashboard, computed from the three
//! collections as the client holds them.

use chrono::{Days, NaiveDate};

use crate::models::{BodyMeasurement, WeightEntry, WorkoutEntry};

/// Window, in days, that counts as recent activity.
pub const ACTIVITY_WINDOW_DAYS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    pub latest_weight: Option<&'a WeightEntry>,
    /// Latest weight minus the one before it, by date.
    pub weight_change: Option<f64>,
    pub latest_measurement: Option<&'a BodyMeasurement>,
    /// Workouts dated within the activity window, in collection order.
    pub recent_workouts: Vec<&'a WorkoutEntry>,
    pub recent_minutes: i64,
    pub average_minutes: Option<i64>,
    pub weight_entry_count: usize,
    pub measurement_count: usize,
    pub workout_count: usize,
}

impl<'a> Dashboard<'a> {
    pub fn build(
        weights: &'a [WeightEntry],
        measurements: &'a [BodyMeasurement],
        workouts: &'a [WorkoutEntry],
        today: NaiveDate,
    ) -> Self {
        let recent_workouts = recent_workouts(workouts, today);
        let recent_minutes = total_minutes(&recent_workouts);

        Self {
            latest_weight: latest_weight(weights),
            weight_change: weight_change(weights),
            latest_measurement: latest_measurement(measurements),
            average_minutes: average_minutes(recent_minutes, recent_workouts.len()),
            recent_minutes,
            recent_workouts,
            weight_entry_count: weights.len(),
            measurement_count: measurements.len(),
            workout_count: workouts.len(),
        }
    }
}

/// Stable sort by date, newest first. Records sharing a date keep their order.
fn newest_first<T>(items: &[T], date: impl Fn(&T) -> NaiveDate) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| date(b).cmp(&date(a)));
    sorted
}

pub fn latest_weight(entries: &[WeightEntry]) -> Option<&WeightEntry> {
    newest_first(entries, |e| e.date).first().copied()
}

pub fn weight_change(entries: &[WeightEntry]) -> Option<f64> {
    match newest_first(entries, |e| e.date).as_slice() {
        [latest, previous, ..] => Some(latest.weight - previous.weight),
        _ => None,
    }
}

pub fn latest_measurement(records: &[BodyMeasurement]) -> Option<&BodyMeasurement> {
    newest_first(records, |m| m.date).first().copied()
}

pub fn recent_workouts(workouts: &[WorkoutEntry], today: NaiveDate) -> Vec<&WorkoutEntry> {
    let since = today
        .checked_sub_days(Days::new(ACTIVITY_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);

    workouts.iter().filter(|w| w.date >= since).collect()
}

pub fn total_minutes(workouts: &[&WorkoutEntry]) -> i64 {
    workouts.iter().map(|w| w.duration).sum()
}

/// Mean session length rounded to the nearest minute.
pub fn average_minutes(total: i64, sessions: usize) -> Option<i64> {
    if sessions == 0 {
        return None;
    }
    Some((total as f64 / sessions as f64).round() as i64)
}
