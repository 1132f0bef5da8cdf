//! Meal log entry model.
//!
//! # Responsibility
//! - Define the immutable record for one logged food entry.
//! - Define `Macros`, the four-value shape shared by meals and totals.
//!
//! # Invariants
//! - `id` is never nil and is unique within one store.
//! - `name` is non-empty after trimming surrounding whitespace.
//! - Every macro value is `>= 0`.

use crate::model::nutrient::Nutrient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;
use uuid::Uuid;

/// Stable identifier for a logged meal.
pub type MealId = Uuid;

/// Validation failure for meal input or imported meal data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealValidationError {
    EmptyName,
    NegativeValue { field: Nutrient, value: i64 },
    NilId,
    DuplicateId(MealId),
}

impl Display for MealValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "meal name must not be empty"),
            Self::NegativeValue { field, value } => {
                write!(f, "meal {field} must be >= 0, got {value}")
            }
            Self::NilId => write!(f, "meal id must not be nil"),
            Self::DuplicateId(id) => write!(f, "duplicate meal id: {id}"),
        }
    }
}

impl Error for MealValidationError {}

/// Calories (kcal) plus protein/carbs/fat (grams).
///
/// Used both for one meal's values and for aggregated totals, so sums are
/// kept in `i64`. Addition saturates at `i64::MAX`, keeping totals `>= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Macros {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl Macros {
    pub fn new(calories: i64, protein: i64, carbs: i64, fat: i64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> i64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    fn validate(&self) -> Result<(), MealValidationError> {
        for field in Nutrient::ALL {
            let value = self.get(field);
            if value < 0 {
                return Err(MealValidationError::NegativeValue { field, value });
            }
        }
        Ok(())
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            calories: self.calories.saturating_add(rhs.calories),
            protein: self.protein.saturating_add(rhs.protein),
            carbs: self.carbs.saturating_add(rhs.carbs),
            fat: self.fat.saturating_add(rhs.fat),
        }
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Macros {
        iter.fold(Macros::default(), Add::add)
    }
}

impl<'a> Sum<&'a Macros> for Macros {
    fn sum<I: Iterator<Item = &'a Macros>>(iter: I) -> Macros {
        iter.copied().sum()
    }
}

/// One logged food entry.
///
/// Serialized flat: `id`, `name`, `timestamp` (RFC 3339, UTC) and the four
/// macro fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MealWire")]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub macros: Macros,
}

impl Meal {
    /// Builds a validated meal with a caller-provided ID.
    ///
    /// Used by the store after it allocates a fresh ID, and by restore paths
    /// where identity already exists. The name is stored trimmed.
    pub fn with_id(
        id: MealId,
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        macros: Macros,
    ) -> Result<Self, MealValidationError> {
        let name = name.into();
        let meal = Self {
            id,
            name: name.trim().to_string(),
            timestamp,
            macros,
        };
        meal.validate()?;
        Ok(meal)
    }

    /// Checks id, name and macro invariants.
    pub fn validate(&self) -> Result<(), MealValidationError> {
        if self.id.is_nil() {
            return Err(MealValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(MealValidationError::EmptyName);
        }
        self.macros.validate()
    }
}

#[derive(Deserialize)]
struct MealWire {
    id: MealId,
    name: String,
    timestamp: DateTime<Utc>,
    calories: i64,
    protein: i64,
    carbs: i64,
    fat: i64,
}

impl TryFrom<MealWire> for Meal {
    type Error = MealValidationError;

    fn try_from(wire: MealWire) -> Result<Self, Self::Error> {
        Meal::with_id(
            wire.id,
            wire.name,
            wire.timestamp,
            Macros::new(wire.calories, wire.protein, wire.carbs, wire.fat),
        )
    }
}
