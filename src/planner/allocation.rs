use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{MealSlot, NutrientCategory};
use crate::planner::constants::{BUDGET_DECIMALS, round_to};

/// Calorie budgets per meal slot and per nutrient category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Allocation {
    pub meal_calories: BTreeMap<MealSlot, f64>,
    /// Global category budgets, computed against the sum of all meal budgets.
    pub nutrient_calories: BTreeMap<NutrientCategory, f64>,
}

impl Allocation {
    pub fn meal(&self, slot: MealSlot) -> f64 {
        self.meal_calories.get(&slot).copied().unwrap_or(0.0)
    }

    pub fn nutrient(&self, category: NutrientCategory) -> f64 {
        self.nutrient_calories.get(&category).copied().unwrap_or(0.0)
    }

    /// Calorie target for one category inside one meal.
    pub fn target_for(&self, slot: MealSlot, category: NutrientCategory) -> f64 {
        self.meal(slot) * category.share()
    }

    /// Category budgets inside a single meal.
    pub fn meal_breakdown(&self, slot: MealSlot) -> BTreeMap<NutrientCategory, f64> {
        NutrientCategory::ALL
            .into_iter()
            .map(|cat| (cat, round_to(self.target_for(slot, cat), BUDGET_DECIMALS)))
            .collect()
    }

    /// Sum of all meal budgets.
    pub fn total(&self) -> f64 {
        self.meal_calories.values().sum()
    }

    /// True when there is no calorie budget to plan for.
    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }
}

/// Split a daily calorie target into meal and nutrient budgets.
///
/// Non-positive or non-finite targets produce an all-zero allocation.
pub fn allocate(daily_calories: f64) -> Allocation {
    let daily = if daily_calories.is_finite() && daily_calories > 0.0 {
        daily_calories
    } else {
        0.0
    };

    let meal_calories: BTreeMap<MealSlot, f64> = MealSlot::ALL
        .into_iter()
        .map(|slot| (slot, round_to(daily * slot.share(), BUDGET_DECIMALS)))
        .collect();

    let meal_sum: f64 = meal_calories.values().sum();

    let nutrient_calories = NutrientCategory::ALL
        .into_iter()
        .map(|cat| (cat, round_to(meal_sum * cat.share(), BUDGET_DECIMALS)))
        .collect();

    Allocation {
        meal_calories,
        nutrient_calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_2000() {
        let alloc = allocate(2000.0);

        assert_eq!(alloc.meal(MealSlot::Breakfast), 500.0);
        assert_eq!(alloc.meal(MealSlot::Lunch), 800.0);
        assert_eq!(alloc.meal(MealSlot::Dinner), 500.0);
        assert_eq!(alloc.meal(MealSlot::Extras), 200.0);

        assert_eq!(alloc.nutrient(NutrientCategory::Protein), 700.0);
        assert_eq!(alloc.nutrient(NutrientCategory::Fat), 300.0);
        assert_eq!(alloc.nutrient(NutrientCategory::Carb), 700.0);
        assert_eq!(alloc.nutrient(NutrientCategory::Vegetable), 150.0);
        assert_eq!(alloc.nutrient(NutrientCategory::Fruit), 150.0);
    }

    #[test]
    fn test_meal_budgets_rounded_to_cents() {
        let alloc = allocate(2647.0);
        // 2647 * 0.25 = 661.75, 2647 * 0.4 = 1058.8
        assert_eq!(alloc.meal(MealSlot::Breakfast), 661.75);
        assert_eq!(alloc.meal(MealSlot::Lunch), 1058.8);
        assert!((alloc.total() - 2647.0).abs() < 0.05);
    }

    #[test]
    fn test_target_for_is_per_meal() {
        let alloc = allocate(2000.0);
        assert!((alloc.target_for(MealSlot::Lunch, NutrientCategory::Protein) - 280.0).abs() < 1e-9);
        assert!((alloc.target_for(MealSlot::Breakfast, NutrientCategory::Fruit) - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_meal_breakdown_sums_to_meal() {
        let alloc = allocate(2000.0);
        let lunch: f64 = alloc.meal_breakdown(MealSlot::Lunch).values().sum();
        assert!((lunch - 800.0).abs() < 0.05);
    }

    #[test]
    fn test_non_positive_target_is_empty() {
        for daily in [0.0, -550.0, f64::NAN] {
            let alloc = allocate(daily);
            assert!(alloc.is_empty());
            assert!(alloc.meal_calories.values().all(|v| *v == 0.0));
            assert!(alloc.nutrient_calories.values().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn test_allocate_is_deterministic() {
        assert_eq!(allocate(1873.0), allocate(1873.0));
    }
}
