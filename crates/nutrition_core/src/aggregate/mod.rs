//! Stateless daily aggregation.
//!
//! # Responsibility
//! - Roll meal lists up into totals.
//! - Turn value/goal pairs into progress ratios and percentage labels.
//!
//! # Invariants
//! - Every function is pure; no store access, no logging.
//! - Progress ratios are finite and within `[0.0, 1.0]`.

pub mod daily;
