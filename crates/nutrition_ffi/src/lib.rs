//! Flutter-facing bridge over `nutrition_core`.

pub mod api;
