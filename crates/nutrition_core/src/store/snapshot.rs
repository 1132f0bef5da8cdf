//! Point-in-time copy of store contents.
//!
//! The core defines no on-disk schema; callers choose how to encode this.
//! Deserialization re-validates the goal and every meal.

use crate::model::goal::Goal;
use crate::model::meal::Meal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub goal: Goal,
    /// Insertion order of the source store.
    pub meals: Vec<Meal>,
}
