//! Tracked nutrient kinds.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One of the four tracked quantities on goals and meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy in kilocalories.
    Calories,
    /// Protein in grams.
    Protein,
    /// Carbohydrates in grams.
    Carbs,
    /// Fat in grams.
    Fat,
}

impl Nutrient {
    /// Stable display/iteration order used by summaries.
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    /// Stable lowercase label, also used as the log/wire field name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }

    /// Measurement unit shown next to values.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Carbs | Self::Fat => "g",
        }
    }
}

impl Display for Nutrient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
