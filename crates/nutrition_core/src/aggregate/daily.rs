//! Per-day rollup and goal progress.
//!
//! Ring/bar progress and the textual percentage deliberately treat a zero
//! goal differently:
//! - `progress_ratio` substitutes a denominator of 1.
//! - `percentage_text` shows `0%` whenever the goal is `<= 0`.

use crate::model::goal::Goal;
use crate::model::meal::{Macros, Meal};
use crate::model::nutrient::Nutrient;

/// Text shown when there is no positive goal to compare against.
pub const NO_GOAL_PERCENTAGE_TEXT: &str = "0%";

/// Sums calories and macros across `meals`. Empty input gives all zeros.
pub fn totals(meals: &[Meal]) -> Macros {
    meals.iter().map(|meal| &meal.macros).sum()
}

/// `min(value / max(goal, 1), 1.0)`, floored at `0.0`.
///
/// Never NaN or infinite: goals `<= 0` count as 1.
pub fn progress_ratio(value: i64, goal: i64) -> f64 {
    let denominator = goal.max(1) as f64;
    (value as f64 / denominator).clamp(0.0, 1.0)
}

/// Integer percentage for a ratio, rounded half away from zero.
pub fn progress_percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}

/// `round(value / goal * 100)` followed by `%`; `"0%"` when `goal <= 0`.
///
/// Not clamped, so overshooting reads e.g. `"150%"`.
pub fn percentage_text(value: i64, goal: i64) -> String {
    if goal <= 0 {
        return NO_GOAL_PERCENTAGE_TEXT.to_string();
    }
    let percent = (value as f64 / goal as f64 * 100.0).round() as i64;
    format!("{percent}%")
}

/// Amount still missing to reach `goal`; `0` once met or exceeded.
pub fn remaining(value: i64, goal: i64) -> i64 {
    goal.saturating_sub(value).max(0)
}

/// Progress of one nutrient against its goal.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientProgress {
    pub nutrient: Nutrient,
    pub value: i64,
    pub goal: i64,
    pub ratio: f64,
    pub percent_text: String,
    pub remaining: i64,
}

impl NutrientProgress {
    pub fn new(nutrient: Nutrient, value: i64, goal: i64) -> Self {
        Self {
            nutrient,
            value,
            goal,
            ratio: progress_ratio(value, goal),
            percent_text: percentage_text(value, goal),
            remaining: remaining(value, goal),
        }
    }
}

/// Everything a daily dashboard renders for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyProgress {
    pub goal: Goal,
    pub totals: Macros,
    pub meal_count: usize,
    /// One entry per nutrient in `Nutrient::ALL` order.
    pub nutrients: Vec<NutrientProgress>,
}

impl DailyProgress {
    pub fn nutrient(&self, nutrient: Nutrient) -> Option<&NutrientProgress> {
        self.nutrients.iter().find(|entry| entry.nutrient == nutrient)
    }
}

/// Builds the day summary from a goal and that day's meals.
pub fn daily_progress(goal: &Goal, meals: &[Meal]) -> DailyProgress {
    let totals = totals(meals);
    let nutrients = Nutrient::ALL
        .iter()
        .map(|&nutrient| NutrientProgress::new(nutrient, totals.get(nutrient), goal.get(nutrient)))
        .collect();
    DailyProgress {
        goal: *goal,
        totals,
        meal_count: meals.len(),
        nutrients,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        daily_progress, percentage_text, progress_percent, progress_ratio, remaining, totals,
    };
    use crate::model::goal::Goal;
    use crate::model::meal::{Macros, Meal};
    use crate::model::nutrient::Nutrient;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn meal(calories: i64, protein: i64, carbs: i64, fat: i64) -> Meal {
        let at = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
        Meal::with_id(
            Uuid::new_v4(),
            "meal",
            at,
            Macros::new(calories, protein, carbs, fat),
        )
        .unwrap()
    }

    #[test]
    fn totals_of_empty_is_zero() {
        assert_eq!(totals(&[]), Macros::new(0, 0, 0, 0));
    }

    #[test]
    fn totals_handle_large_aggregates() {
        let meals: Vec<_> = (0..1_000).map(|_| meal(5_000, 300, 600, 200)).collect();
        assert_eq!(totals(&meals), Macros::new(5_000_000, 300_000, 600_000, 200_000));
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let meals = [meal(i64::MAX, 1, 0, i64::MAX), meal(1, 1, 0, 5)];
        let day_totals = totals(&meals);
        assert_eq!(day_totals, Macros::new(i64::MAX, 2, 0, i64::MAX));

        let progress = daily_progress(&Goal::default(), &meals);
        let calories = progress.nutrient(Nutrient::Calories).unwrap();
        assert_eq!(calories.ratio, 1.0);
        assert_eq!(calories.remaining, 0);
    }

    #[test]
    fn progress_ratio_clamps_and_floors_goal() {
        assert_eq!(progress_ratio(50, 100), 0.5);
        assert_eq!(progress_ratio(150, 100), 1.0);
        assert_eq!(progress_ratio(0, 0), 0.0);
        assert_eq!(progress_ratio(1, 0), 1.0);
        assert_eq!(progress_ratio(5, -10), 1.0);
        assert!(progress_ratio(i64::MAX, 0).is_finite());
    }

    #[test]
    fn percentage_text_uses_zero_for_missing_goal() {
        assert_eq!(percentage_text(0, 0), "0%");
        assert_eq!(percentage_text(100, 0), "0%");
        assert_eq!(percentage_text(100, -5), "0%");
        assert_eq!(percentage_text(50, 100), "50%");
        assert_eq!(percentage_text(150, 100), "150%");
        assert_eq!(percentage_text(1, 3), "33%");
        assert_eq!(percentage_text(2, 3), "67%");
    }

    #[test]
    fn ratio_and_text_diverge_on_zero_goal() {
        assert_eq!(progress_percent(progress_ratio(100, 0)), 100);
        assert_eq!(percentage_text(100, 0), "0%");
    }

    #[test]
    fn remaining_never_goes_negative() {
        assert_eq!(remaining(30, 140), 110);
        assert_eq!(remaining(200, 140), 0);
        assert_eq!(remaining(0, 0), 0);
    }

    #[test]
    fn daily_progress_lists_every_nutrient() {
        let goal = Goal::new(2000, 100, 250, 0);
        let progress = daily_progress(&goal, &[meal(500, 25, 50, 10), meal(500, 25, 50, 10)]);

        assert_eq!(progress.meal_count, 2);
        assert_eq!(progress.totals, Macros::new(1000, 50, 100, 20));
        assert_eq!(progress.nutrients.len(), 4);

        let calories = progress.nutrient(Nutrient::Calories).unwrap();
        assert_eq!(calories.ratio, 0.5);
        assert_eq!(calories.percent_text, "50%");
        assert_eq!(calories.remaining, 1000);

        let fat = progress.nutrient(Nutrient::Fat).unwrap();
        assert_eq!(fat.ratio, 1.0);
        assert_eq!(fat.percent_text, "0%");
        assert_eq!(fat.remaining, 0);
    }
}
