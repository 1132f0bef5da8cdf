//! Nutrition domain model.
//!
//! # Responsibility
//! - Define the canonical goal and meal records owned by the store.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every calorie/macro field is `>= 0` once validated.
//! - Every meal is identified by a stable `MealId` that is never reused.

pub mod goal;
pub mod meal;
pub mod nutrient;
