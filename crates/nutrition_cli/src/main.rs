//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nutrition_core` linkage.
//! - Print a deterministic demo day so output can be diffed by eye.

use chrono::{NaiveDate, TimeZone, Utc};
use nutrition_core::{daily_progress, Goal, Macros, NutritionResult, NutritionStore};

fn main() {
    println!("nutrition_core ping={}", nutrition_core::ping());
    println!("nutrition_core version={}", nutrition_core::core_version());

    if let Err(err) = print_demo_day() {
        eprintln!("demo day failed: {err}");
        std::process::exit(1);
    }
}

fn print_demo_day() -> NutritionResult<()> {
    let mut store = NutritionStore::default();
    store.set_goals(Goal::new(2200, 140, 220, 70))?;

    let demo = [
        ("Oatmeal & berries", 8, Macros::new(430, 30, 50, 12)),
        ("Chicken bowl", 13, Macros::new(650, 50, 70, 13)),
        ("Greek yogurt", 16, Macros::new(220, 18, 30, 4)),
    ];
    let mut day = None::<NaiveDate>;
    for (name, hour, macros) in demo {
        if let Some(at) = Utc.with_ymd_and_hms(2026, 1, 15, hour, 0, 0).single() {
            store.add_meal(name, at, macros)?;
            day = Some(store.calendar_day(at));
        }
    }
    let Some(day) = day else {
        return Ok(());
    };

    let progress = daily_progress(&store.current_goal(), &store.meals_on(day));
    println!("demo day={day} meals={}", progress.meal_count);
    for entry in &progress.nutrients {
        println!(
            "  {:<8} {:>5}/{:<5} {:<4} {:>4}  remaining={}",
            entry.nutrient.label(),
            entry.value,
            entry.goal,
            entry.nutrient.unit(),
            entry.percent_text,
            entry.remaining
        );
    }
    Ok(())
}
