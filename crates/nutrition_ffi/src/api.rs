//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose goal/meal use-cases and progress math to Dart via FRB.
//! - Own the process-wide store the UI reads from and writes to.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Validation failures come back as envelopes, never as panics.
//! - Timestamps cross the boundary as UTC epoch milliseconds.

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use nutrition_core::{
    core_version as core_version_inner, daily_progress as daily_progress_inner,
    init_logging as init_logging_inner, percentage_text as percentage_text_inner,
    ping as ping_inner, progress_ratio as progress_ratio_inner, DailyProgress, Goal, Macros,
    Meal, Nutrient, NutrientProgress, NutritionStore, SharedStore, StoreConfig,
};
use std::sync::OnceLock;

const UTC_OFFSET_ENV: &str = "NUTRITION_UTC_OFFSET_SECONDS";
static STORE: OnceLock<SharedStore> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Daily targets as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalView {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// One logged meal as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealView {
    /// Stable meal ID in string form.
    pub meal_id: String,
    pub name: String,
    /// UTC epoch milliseconds.
    pub timestamp_ms: i64,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Ring/bar row for one nutrient.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientProgressView {
    /// `calories|protein|carbs|fat`.
    pub nutrient: String,
    /// `kcal|g`.
    pub unit: String,
    pub value: i64,
    pub goal: i64,
    /// Clamped to `[0.0, 1.0]`.
    pub ratio: f64,
    pub percent_text: String,
    pub remaining: i64,
}

/// Dashboard payload for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyProgressView {
    pub ok: bool,
    /// ISO date (`YYYY-MM-DD`) the summary covers; empty on failure.
    pub date: String,
    pub meal_count: u32,
    pub goal: GoalView,
    pub nutrients: Vec<NutrientProgressView>,
    pub message: String,
}

/// Generic action response envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Created meal ID for `add_meal`.
    pub meal_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, meal_id: Option<String>) -> Self {
        Self {
            ok: true,
            meal_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            meal_id: None,
            message: message.into(),
        }
    }
}

/// Replaces all four daily targets.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Negative values fail and keep the previous goal.
#[flutter_rust_bridge::frb(sync)]
pub fn set_goals(calories: i64, protein: i64, carbs: i64, fat: i64) -> ActionResponse {
    match store().set_goals(Goal::new(calories, protein, carbs, fat)) {
        Ok(()) => ActionResponse::success("Goals updated.", None),
        Err(err) => ActionResponse::failure(format!("set_goals failed: {err}")),
    }
}

/// Replaces one target (`calories|protein|carbs|fat`).
#[flutter_rust_bridge::frb(sync)]
pub fn update_goal(nutrient: String, value: i64) -> ActionResponse {
    let Some(nutrient) = parse_nutrient(nutrient.as_str()) else {
        return ActionResponse::failure(format!(
            "update_goal failed: unknown nutrient `{}`",
            nutrient.trim()
        ));
    };
    match store().update_goal(nutrient, value) {
        Ok(_) => ActionResponse::success("Goal updated.", None),
        Err(err) => ActionResponse::failure(format!("update_goal failed: {err}")),
    }
}

/// Returns the active goal.
#[flutter_rust_bridge::frb(sync)]
pub fn current_goal() -> GoalView {
    to_goal_view(store().current_goal())
}

/// Logs one meal.
///
/// # FFI contract
/// - `name` is trimmed and must not be blank.
/// - Macro values must be `>= 0`.
/// - Returns the created meal ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_meal(
    name: String,
    timestamp_ms: i64,
    calories: i64,
    protein: i64,
    carbs: i64,
    fat: i64,
) -> ActionResponse {
    let Some(timestamp) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return ActionResponse::failure(format!(
            "add_meal failed: timestamp out of range: {timestamp_ms}"
        ));
    };
    match store().add_meal(name, timestamp, Macros::new(calories, protein, carbs, fat)) {
        Ok(meal) => ActionResponse::success("Meal logged.", Some(meal.id.to_string())),
        Err(err) => ActionResponse::failure(format!("add_meal failed: {err}")),
    }
}

/// Lists meals on one calendar day in insertion order.
///
/// Returns an empty list for impossible dates.
#[flutter_rust_bridge::frb(sync)]
pub fn meals_on(year: i32, month: u32, day: u32) -> Vec<MealView> {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => store().meals_on(date).iter().map(to_meal_view).collect(),
        None => Vec::new(),
    }
}

/// Builds the dashboard summary for one calendar day.
#[flutter_rust_bridge::frb(sync)]
pub fn daily_progress(year: i32, month: u32, day: u32) -> DailyProgressView {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return DailyProgressView {
            ok: false,
            date: String::new(),
            meal_count: 0,
            goal: current_goal(),
            nutrients: Vec::new(),
            message: format!("daily_progress failed: invalid date {year}-{month}-{day}"),
        };
    };
    to_daily_progress_view(date, progress_on(date))
}

/// Builds the dashboard summary for the calendar day containing `timestamp_ms`.
#[flutter_rust_bridge::frb(sync)]
pub fn daily_progress_at(timestamp_ms: i64) -> DailyProgressView {
    let date = DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|instant| store().calendar_day(instant));
    match date {
        Some(date) => to_daily_progress_view(date, progress_on(date)),
        None => DailyProgressView {
            ok: false,
            date: String::new(),
            meal_count: 0,
            goal: current_goal(),
            nutrients: Vec::new(),
            message: format!("daily_progress_at failed: timestamp out of range: {timestamp_ms}"),
        },
    }
}

/// Clamped progress ratio for rings and bars.
#[flutter_rust_bridge::frb(sync)]
pub fn progress_ratio(value: i64, goal: i64) -> f64 {
    progress_ratio_inner(value, goal)
}

/// Percentage label; `0%` when there is no positive goal.
#[flutter_rust_bridge::frb(sync)]
pub fn percentage_text(value: i64, goal: i64) -> String {
    percentage_text_inner(value, goal)
}

fn store() -> &'static SharedStore {
    STORE.get_or_init(|| {
        let store = NutritionStore::new(resolve_store_config()).unwrap_or_default();
        SharedStore::new(store)
    })
}

fn progress_on(date: NaiveDate) -> DailyProgress {
    store().read(|inner| daily_progress_inner(&inner.current_goal(), &inner.meals_on(date)))
}

fn resolve_store_config() -> StoreConfig {
    let Ok(raw) = std::env::var(UTC_OFFSET_ENV) else {
        return StoreConfig::with_local_offset();
    };
    let parsed = raw
        .trim()
        .parse::<i32>()
        .ok()
        .and_then(StoreConfig::with_utc_offset_seconds);
    match parsed {
        Some(config) => config,
        None => {
            warn!(
                "event=store_config module=ffi status=error reason=invalid_utc_offset env={UTC_OFFSET_ENV}"
            );
            StoreConfig::with_local_offset()
        }
    }
}

fn parse_nutrient(raw: &str) -> Option<Nutrient> {
    let normalized = raw.trim().to_ascii_lowercase();
    Nutrient::ALL
        .into_iter()
        .find(|nutrient| nutrient.label() == normalized)
}

fn to_goal_view(goal: Goal) -> GoalView {
    GoalView {
        calories: goal.calories,
        protein: goal.protein,
        carbs: goal.carbs,
        fat: goal.fat,
    }
}

fn to_meal_view(meal: &Meal) -> MealView {
    MealView {
        meal_id: meal.id.to_string(),
        name: meal.name.clone(),
        timestamp_ms: meal.timestamp.timestamp_millis(),
        calories: meal.macros.calories,
        protein: meal.macros.protein,
        carbs: meal.macros.carbs,
        fat: meal.macros.fat,
    }
}

fn to_nutrient_view(entry: &NutrientProgress) -> NutrientProgressView {
    NutrientProgressView {
        nutrient: entry.nutrient.label().to_string(),
        unit: entry.nutrient.unit().to_string(),
        value: entry.value,
        goal: entry.goal,
        ratio: entry.ratio,
        percent_text: entry.percent_text.clone(),
        remaining: entry.remaining,
    }
}

fn to_daily_progress_view(date: NaiveDate, progress: DailyProgress) -> DailyProgressView {
    let message = if progress.meal_count == 0 {
        "No meals logged.".to_string()
    } else {
        format!("{} meal(s) logged.", progress.meal_count)
    };
    DailyProgressView {
        ok: true,
        date: date.format("%Y-%m-%d").to_string(),
        meal_count: u32::try_from(progress.meal_count).unwrap_or(u32::MAX),
        goal: to_goal_view(progress.goal),
        nutrients: progress.nutrients.iter().map(to_nutrient_view).collect(),
        message,
    }
}
