use nutrition_core::{
    Goal, GoalValidationError, Nutrient, NutritionError, NutritionStore, StoreConfig,
};

#[test]
fn store_starts_with_default_goal() {
    let store = NutritionStore::default();
    assert_eq!(store.current_goal(), Goal::new(2200, 140, 220, 70));
}

#[test]
fn store_starts_with_configured_goal() {
    let config = StoreConfig::default().initial_goal(Goal::new(1900, 120, 200, 60));
    let store = NutritionStore::new(config).unwrap();
    assert_eq!(store.current_goal(), Goal::new(1900, 120, 200, 60));
}

#[test]
fn set_goals_then_current_goal_returns_it_exactly() {
    let mut store = NutritionStore::default();
    for goal in [
        Goal::new(0, 0, 0, 0),
        Goal::new(1, 2, 3, 4),
        Goal::new(3500, 210, 400, 120),
    ] {
        store.set_goals(goal).unwrap();
        assert_eq!(store.current_goal(), goal);
    }
}

#[test]
fn set_goals_rejects_each_negative_field() {
    let mut store = NutritionStore::default();
    let before = store.current_goal();

    for field in Nutrient::ALL {
        let goal = Goal::default().with(field, -10);
        let err = store.set_goals(goal).unwrap_err();
        assert_eq!(
            err,
            NutritionError::InvalidGoal(GoalValidationError::NegativeValue { field, value: -10 })
        );
    }
    assert_eq!(store.current_goal(), before);
}

#[test]
fn goal_json_rejects_negative_values() {
    let value = serde_json::json!({
        "calories": 2000,
        "protein": -1,
        "carbs": 200,
        "fat": 60
    });

    let err = serde_json::from_value::<Goal>(value).unwrap_err();
    assert!(
        err.to_string().contains("goal protein must be >= 0, got -1"),
        "unexpected error: {err}"
    );
}
