use assert_float_eq::assert_float_absolute_eq;

use daily_menu_planner::error::PlannerError;
use daily_menu_planner::models::{MealSlot, NutrientCategory, Profile};
use daily_menu_planner::planner::{allocate, compute_energy};

fn make_profile(gender: &str, height: f64, weight: f64, age: f64, activity: &str) -> Profile {
    Profile {
        gender: Some(gender.to_string()),
        height: Some(height),
        weight: Some(weight),
        goal_weight: Some(weight - 5.0),
        activity_level: Some(activity.to_string()),
        age: Some(age),
    }
}

#[test]
fn test_active_male_example() {
    let energy = compute_energy(&make_profile("male", 180.0, 80.0, 30.0, "active")).unwrap();

    assert_float_absolute_eq!(energy.bmr, 1853.632, 1e-6);
    assert_float_absolute_eq!(energy.tdee, 3197.5152, 1e-6);
    assert_float_absolute_eq!(energy.daily_deficit, 550.0, 1e-9);
    assert_eq!(energy.recommended_daily_calories, 2648);
}

#[test]
fn test_energy_is_deterministic() {
    let profile = make_profile("female", 168.0, 72.0, 41.0, "moderatelyActive");
    let first = compute_energy(&profile).unwrap();
    for _ in 0..10 {
        assert_eq!(compute_energy(&profile).unwrap(), first);
    }
}

#[test]
fn test_activity_multipliers_order_tdee() {
    let levels = [
        "notVeryActive",
        "lightlyActive",
        "moderatelyActive",
        "active",
        "veryActive",
    ];
    let tdees: Vec<f64> = levels
        .iter()
        .map(|l| compute_energy(&make_profile("male", 175.0, 70.0, 25.0, l)).unwrap().tdee)
        .collect();

    for window in tdees.windows(2) {
        assert!(window[1] > window[0]);
    }
}

#[test]
fn test_other_gender_is_degenerate_not_error() {
    let energy = compute_energy(&make_profile("other", 175.0, 70.0, 25.0, "active")).unwrap();
    assert_eq!(energy.bmr, 0.0);
    assert_eq!(energy.tdee, 0.0);
    assert_eq!(energy.recommended_daily_calories, -550);

    // Negative target means no menu budget at all.
    assert!(allocate(energy.recommended_daily_calories as f64).is_empty());
}

#[test]
fn test_missing_fields_are_unavailable() {
    let empty = Profile::default();
    assert!(matches!(
        compute_energy(&empty),
        Err(PlannerError::Unavailable(_))
    ));

    let json = r#"{"gender": "male", "height": "180", "weight": "", "goalWeight": 70, "age": 30}"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert!(matches!(
        compute_energy(&profile),
        Err(PlannerError::Unavailable("weight"))
    ));
}

#[test]
fn test_allocation_from_energy_target() {
    let energy = compute_energy(&make_profile("male", 180.0, 80.0, 30.0, "active")).unwrap();
    let alloc = allocate(energy.recommended_daily_calories as f64);

    assert_float_absolute_eq!(alloc.meal(MealSlot::Breakfast), 662.0, 1e-9);
    assert_float_absolute_eq!(alloc.meal(MealSlot::Lunch), 1059.2, 1e-9);
    assert_float_absolute_eq!(alloc.meal(MealSlot::Extras), 264.8, 1e-9);
    assert_float_absolute_eq!(alloc.nutrient(NutrientCategory::Protein), 926.8, 1e-9);
    assert_float_absolute_eq!(alloc.total(), 2648.0, 1e-6);
}
