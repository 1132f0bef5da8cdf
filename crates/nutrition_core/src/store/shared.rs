//! Thread-safe store handle.
//!
//! # Responsibility
//! - Serialize every store operation behind one mutex.
//! - Offer read-after-write consistency to callers on any thread.
//!
//! # Invariants
//! - Each method holds the lock for exactly one store operation, so no
//!   reader observes a partially appended meal.
//! - A poisoned lock is recovered: store writes are validate-then-commit,
//!   so the inner value is still consistent.

use crate::model::goal::Goal;
use crate::model::meal::{Macros, Meal, MealId};
use crate::model::nutrient::Nutrient;
use crate::store::nutrition_store::{NutritionResult, NutritionStore};
use crate::store::snapshot::StoreSnapshot;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle sharing one [`NutritionStore`].
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<NutritionStore>>,
}

impl SharedStore {
    pub fn new(store: NutritionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn set_goals(&self, goal: Goal) -> NutritionResult<()> {
        self.lock().set_goals(goal)
    }

    pub fn update_goal(&self, nutrient: Nutrient, value: i64) -> NutritionResult<Goal> {
        self.lock().update_goal(nutrient, value)
    }

    pub fn current_goal(&self) -> Goal {
        self.lock().current_goal()
    }

    pub fn add_meal(
        &self,
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        macros: Macros,
    ) -> NutritionResult<Meal> {
        self.lock().add_meal(name, timestamp, macros)
    }

    pub fn meals_on(&self, date: NaiveDate) -> Vec<Meal> {
        self.lock().meals_on(date)
    }

    pub fn meal(&self, id: MealId) -> Option<Meal> {
        self.lock().meal(id).cloned()
    }

    pub fn meal_count(&self) -> usize {
        self.lock().meal_count()
    }

    /// Runs several reads under one lock acquisition, e.g. goal plus a
    /// day's meals for a consistent dashboard.
    pub fn read<R>(&self, f: impl FnOnce(&NutritionStore) -> R) -> R {
        f(&*self.lock())
    }

    /// Calendar day of `instant` in the store's configured offset.
    pub fn calendar_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.lock().calendar_day(instant)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().snapshot()
    }

    /// Swaps the whole store, e.g. after restoring a snapshot.
    pub fn replace(&self, store: NutritionStore) {
        *self.lock() = store;
    }

    fn lock(&self) -> MutexGuard<'_, NutritionStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::SharedStore;
    use crate::aggregate::daily::totals;
    use crate::model::goal::Goal;
    use crate::model::meal::Macros;
    use crate::store::config::StoreConfig;
    use crate::store::nutrition_store::NutritionStore;
    use chrono::{TimeZone, Utc};
    use std::thread;

    #[test]
    fn concurrent_writers_never_lose_meals() {
        let store = SharedStore::default();
        let at = Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let store = store.clone();
                thread::spawn(move || {
                    for index in 0..25 {
                        store
                            .add_meal(format!("w{worker}-{index}"), at, Macros::new(10, 1, 1, 1))
                            .expect("valid meal");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread should not panic");
        }

        assert_eq!(store.meal_count(), 100);
        let day_totals = store.read(|inner| totals(&inner.meals_on(at.date_naive())));
        assert_eq!(day_totals, Macros::new(1000, 100, 100, 100));
    }

    #[test]
    fn add_then_query_observes_new_meal() {
        let store = SharedStore::default();
        let at = Utc.with_ymd_and_hms(2026, 7, 2, 7, 30, 0).unwrap();
        let meal = store.add_meal("Eggs", at, Macros::new(200, 14, 1, 15)).unwrap();

        let day = store.calendar_day(at);
        assert_eq!(store.meals_on(day), vec![meal.clone()]);
        assert_eq!(store.meal(meal.id), Some(meal));
    }

    #[test]
    fn replace_with_restored_snapshot_swaps_contents() {
        let source = SharedStore::default();
        source.set_goals(Goal::new(1800, 120, 180, 60)).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 7, 3, 12, 0, 0).unwrap();
        let meal = source.add_meal("Rice", at, Macros::new(400, 8, 88, 1)).unwrap();

        let target = SharedStore::default();
        target
            .add_meal("Discarded", at, Macros::new(50, 0, 0, 0))
            .unwrap();
        let restored =
            NutritionStore::from_snapshot(StoreConfig::default(), source.snapshot()).unwrap();
        target.replace(restored);

        assert_eq!(target.current_goal(), Goal::new(1800, 120, 180, 60));
        assert_eq!(target.meals_on(at.date_naive()), vec![meal]);
        assert_eq!(target.snapshot(), source.snapshot());
    }
}
