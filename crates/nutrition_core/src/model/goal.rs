//! Daily goal model.
//!
//! # Responsibility
//! - Define the single active set of daily targets.
//! - Reject negative targets before they reach the store.
//!
//! # Invariants
//! - All four targets are `>= 0` after `validate()` succeeds.
//! - Deserialization runs the same validation as in-process writes.

use crate::model::nutrient::Nutrient;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_CALORIES_GOAL: i64 = 2200;
pub const DEFAULT_PROTEIN_GOAL: i64 = 140;
pub const DEFAULT_CARBS_GOAL: i64 = 220;
pub const DEFAULT_FAT_GOAL: i64 = 70;

/// Validation failure for goal targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalValidationError {
    NegativeValue { field: Nutrient, value: i64 },
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeValue { field, value } => {
                write!(f, "goal {field} must be >= 0, got {value}")
            }
        }
    }
}

impl Error for GoalValidationError {}

/// Daily targets for calories (kcal) and macros (grams).
///
/// Replaced wholesale by the store; never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GoalWire")]
pub struct Goal {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl Goal {
    pub fn new(calories: i64, protein: i64, carbs: i64, fat: i64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Returns the target for one nutrient.
    pub fn get(&self, nutrient: Nutrient) -> i64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    /// Returns a copy with one target replaced. Does not validate.
    pub fn with(mut self, nutrient: Nutrient, value: i64) -> Self {
        match nutrient {
            Nutrient::Calories => self.calories = value,
            Nutrient::Protein => self.protein = value,
            Nutrient::Carbs => self.carbs = value,
            Nutrient::Fat => self.fat = value,
        }
        self
    }

    /// Checks that every target is non-negative.
    ///
    /// Reports the first offending field in `Nutrient::ALL` order.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        for field in Nutrient::ALL {
            let value = self.get(field);
            if value < 0 {
                return Err(GoalValidationError::NegativeValue { field, value });
            }
        }
        Ok(())
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::new(
            DEFAULT_CALORIES_GOAL,
            DEFAULT_PROTEIN_GOAL,
            DEFAULT_CARBS_GOAL,
            DEFAULT_FAT_GOAL,
        )
    }
}

#[derive(Deserialize)]
struct GoalWire {
    calories: i64,
    protein: i64,
    carbs: i64,
    fat: i64,
}

impl TryFrom<GoalWire> for Goal {
    type Error = GoalValidationError;

    fn try_from(wire: GoalWire) -> Result<Self, Self::Error> {
        let goal = Goal::new(wire.calories, wire.protein, wire.carbs, wire.fat);
        goal.validate()?;
        Ok(goal)
    }
}
