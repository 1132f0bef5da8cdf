//! Store construction settings.

use crate::model::goal::Goal;
use chrono::{FixedOffset, Local, Offset, Utc};

/// Settings applied when a store is created.
///
/// `utc_offset` decides which calendar day a meal timestamp belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub utc_offset: FixedOffset,
    pub initial_goal: Goal,
}

impl StoreConfig {
    /// Uses the host's current local offset for calendar-day bucketing.
    ///
    /// The offset is captured once; later DST transitions are not followed.
    pub fn with_local_offset() -> Self {
        Self {
            utc_offset: Local::now().offset().fix(),
            ..Self::default()
        }
    }

    /// Uses a fixed offset given in seconds east of UTC.
    ///
    /// Returns `None` when the offset is not strictly within one day.
    pub fn with_utc_offset_seconds(seconds: i32) -> Option<Self> {
        let utc_offset = FixedOffset::east_opt(seconds)?;
        Some(Self {
            utc_offset,
            ..Self::default()
        })
    }

    /// Replaces the goal the store starts with.
    pub fn initial_goal(mut self, goal: Goal) -> Self {
        self.initial_goal = goal;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
            initial_goal: Goal::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreConfig;
    use crate::model::goal::Goal;

    #[test]
    fn default_is_utc_with_default_goal() {
        let config = StoreConfig::default();
        assert_eq!(config.utc_offset.local_minus_utc(), 0);
        assert_eq!(config.initial_goal, Goal::default());
    }

    #[test]
    fn offset_seconds_accepts_in_range_values() {
        let config = StoreConfig::with_utc_offset_seconds(-5 * 3600).expect("valid offset");
        assert_eq!(config.utc_offset.local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn offset_seconds_rejects_full_day() {
        assert!(StoreConfig::with_utc_offset_seconds(86_400).is_none());
        assert!(StoreConfig::with_utc_offset_seconds(-86_400).is_none());
        assert!(StoreConfig::with_utc_offset_seconds(i32::MIN).is_none());
        assert!(StoreConfig::with_utc_offset_seconds(i32::MAX).is_none());
        assert!(StoreConfig::with_utc_offset_seconds(86_399).is_some());
    }
}
