//! Core domain logic for the nutrition tracker.
//! This crate is the single source of truth for goal and meal invariants.

pub mod aggregate;
pub mod logging;
pub mod model;
pub mod store;

pub use aggregate::daily::{
    daily_progress, percentage_text, progress_percent, progress_ratio, remaining, totals,
    DailyProgress, NutrientProgress,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::goal::{Goal, GoalValidationError};
pub use model::meal::{Macros, Meal, MealId, MealValidationError};
pub use model::nutrient::Nutrient;
pub use store::config::StoreConfig;
pub use store::nutrition_store::{NutritionError, NutritionResult, NutritionStore};
pub use store::shared::SharedStore;
pub use store::snapshot::StoreSnapshot;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
