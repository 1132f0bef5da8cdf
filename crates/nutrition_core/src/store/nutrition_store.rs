//! Nutrition store: goal + meal log ownership.
//!
//! # Responsibility
//! - Hold the active `Goal` and the insertion-ordered meal log.
//! - Allocate fresh meal IDs and enforce validation on every write.
//! - Answer calendar-day queries in the configured UTC offset.
//!
//! # Invariants
//! - `meal_ids` always mirrors the IDs in `meals`.
//! - Validation happens before any field is touched.
//! - Log lines carry metadata only; meal names are never logged.

use crate::model::goal::{Goal, GoalValidationError};
use crate::model::meal::{Macros, Meal, MealId, MealValidationError};
use crate::model::nutrient::Nutrient;
use crate::store::config::StoreConfig;
use crate::store::snapshot::StoreSnapshot;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type NutritionResult<T> = Result<T, NutritionError>;

/// Store-level error. Both kinds are recoverable validation rejections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NutritionError {
    InvalidGoal(GoalValidationError),
    InvalidMeal(MealValidationError),
}

impl Display for NutritionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGoal(err) => write!(f, "invalid goal: {err}"),
            Self::InvalidMeal(err) => write!(f, "invalid meal: {err}"),
        }
    }
}

impl Error for NutritionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGoal(err) => Some(err),
            Self::InvalidMeal(err) => Some(err),
        }
    }
}

impl From<GoalValidationError> for NutritionError {
    fn from(value: GoalValidationError) -> Self {
        Self::InvalidGoal(value)
    }
}

impl From<MealValidationError> for NutritionError {
    fn from(value: MealValidationError) -> Self {
        Self::InvalidMeal(value)
    }
}

/// Single-owner in-memory store.
///
/// Not synchronized; wrap in [`crate::store::shared::SharedStore`] when
/// several threads need access.
#[derive(Debug, Clone)]
pub struct NutritionStore {
    goal: Goal,
    meals: Vec<Meal>,
    meal_ids: HashSet<MealId>,
    utc_offset: FixedOffset,
}

impl Default for NutritionStore {
    fn default() -> Self {
        Self {
            goal: Goal::default(),
            meals: Vec::new(),
            meal_ids: HashSet::new(),
            utc_offset: StoreConfig::default().utc_offset,
        }
    }
}

impl NutritionStore {
    /// Creates an empty store.
    ///
    /// # Errors
    /// - `InvalidGoal` when `config.initial_goal` has a negative field.
    pub fn new(config: StoreConfig) -> NutritionResult<Self> {
        config.initial_goal.validate()?;
        info!(
            "event=store_init module=store status=ok utc_offset_seconds={}",
            config.utc_offset.local_minus_utc()
        );
        Ok(Self {
            goal: config.initial_goal,
            meals: Vec::new(),
            meal_ids: HashSet::new(),
            utc_offset: config.utc_offset,
        })
    }

    /// Rebuilds a store from a snapshot taken by an external collaborator.
    ///
    /// The snapshot goal replaces `config.initial_goal`. Meals keep their
    /// IDs and snapshot order.
    ///
    /// # Errors
    /// - `InvalidGoal` when the snapshot goal is invalid.
    /// - `InvalidMeal` when any meal is invalid or an ID repeats.
    pub fn from_snapshot(config: StoreConfig, snapshot: StoreSnapshot) -> NutritionResult<Self> {
        snapshot.goal.validate()?;

        let mut meal_ids = HashSet::with_capacity(snapshot.meals.len());
        for meal in &snapshot.meals {
            meal.validate()?;
            if !meal_ids.insert(meal.id) {
                return Err(MealValidationError::DuplicateId(meal.id).into());
            }
        }

        info!(
            "event=store_restore module=store status=ok meal_count={} utc_offset_seconds={}",
            snapshot.meals.len(),
            config.utc_offset.local_minus_utc()
        );
        Ok(Self {
            goal: snapshot.goal,
            meals: snapshot.meals,
            meal_ids,
            utc_offset: config.utc_offset,
        })
    }

    /// Replaces the active goal wholesale.
    ///
    /// # Errors
    /// - `InvalidGoal` when any field is negative; the old goal stays active.
    pub fn set_goals(&mut self, goal: Goal) -> NutritionResult<()> {
        if let Err(err) = goal.validate() {
            warn!("event=goal_rejected module=store status=error reason=\"{err}\"");
            return Err(err.into());
        }
        self.goal = goal;
        info!(
            "event=goal_set module=store status=ok calories={} protein={} carbs={} fat={}",
            goal.calories, goal.protein, goal.carbs, goal.fat
        );
        Ok(())
    }

    /// Replaces one target of the active goal and returns the new goal.
    ///
    /// # Errors
    /// - `InvalidGoal` when `value` is negative; the old goal stays active.
    pub fn update_goal(&mut self, nutrient: Nutrient, value: i64) -> NutritionResult<Goal> {
        let goal = self.goal.with(nutrient, value);
        self.set_goals(goal)?;
        Ok(goal)
    }

    /// Returns the active goal.
    pub fn current_goal(&self) -> Goal {
        self.goal
    }

    /// Appends a new meal with a freshly allocated ID and returns it.
    ///
    /// # Errors
    /// - `InvalidMeal` when the name is blank or any macro is negative; the
    ///   log is left unchanged.
    pub fn add_meal(
        &mut self,
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        macros: Macros,
    ) -> NutritionResult<Meal> {
        let id = self.next_meal_id();
        let meal = match Meal::with_id(id, name, timestamp, macros) {
            Ok(meal) => meal,
            Err(err) => {
                warn!("event=meal_rejected module=store status=error reason=\"{err}\"");
                return Err(err.into());
            }
        };

        self.meal_ids.insert(meal.id);
        self.meals.push(meal.clone());
        info!(
            "event=meal_added module=store status=ok meal_id={} meal_count={}",
            meal.id,
            self.meals.len()
        );
        Ok(meal)
    }

    /// Returns meals whose timestamp falls on `date` in the configured
    /// offset, in insertion order. Empty when nothing matches.
    pub fn meals_on(&self, date: NaiveDate) -> Vec<Meal> {
        self.meals
            .iter()
            .filter(|meal| self.calendar_day(meal.timestamp) == date)
            .cloned()
            .collect()
    }

    /// Same as [`Self::meals_on`] for the calendar day containing `instant`.
    pub fn meals_on_timestamp(&self, instant: DateTime<Utc>) -> Vec<Meal> {
        self.meals_on(self.calendar_day(instant))
    }

    /// Returns meals on calendar days in `start..=end`, in insertion order.
    ///
    /// Empty when `start > end`.
    pub fn meals_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<Meal> {
        self.meals
            .iter()
            .filter(|meal| {
                let day = self.calendar_day(meal.timestamp);
                start <= day && day <= end
            })
            .cloned()
            .collect()
    }

    /// All meals in insertion order.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal(&self, id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }

    /// Calendar day of `instant` in the configured offset.
    pub fn calendar_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.utc_offset).date_naive()
    }

    /// Copies the goal and meal log for an external persistence layer.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            goal: self.goal,
            meals: self.meals.clone(),
        }
    }

    fn next_meal_id(&self) -> MealId {
        loop {
            let id = Uuid::new_v4();
            if !self.meal_ids.contains(&id) {
                return id;
            }
        }
    }
}
