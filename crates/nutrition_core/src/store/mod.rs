//! In-memory nutrition store.
//!
//! # Responsibility
//! - Own the active goal and the meal log as the single source of truth.
//! - Expose validated mutation and calendar-day query entry points.
//! - Provide snapshot/restore hooks for external persistence collaborators.
//!
//! # Invariants
//! - A goal is always present after construction.
//! - Mutations validate fully before committing; a rejected call leaves
//!   the store unchanged.
//! - Queries group by calendar day in the configured offset, never by
//!   storage order.

pub mod config;
pub mod nutrition_store;
pub mod shared;
pub mod snapshot;
