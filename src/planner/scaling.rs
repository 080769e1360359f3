use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, ScaledFoodItem};
use crate::planner::constants::{PORTION_DECIMALS, REFERENCE_PORTION_GRAMS, round_to};

/// Rescale a reference item so its calories hit `target_calories`.
///
/// Macros and grams share one factor; calories are set to `round(target)`
/// directly so rounding never compounds against the budget.
pub fn scale_item(item: &FoodItem, target_calories: f64) -> Result<ScaledFoodItem> {
    if !item.is_scalable() {
        return Err(PlannerError::DivisionUndefined(item.name.clone()));
    }
    if !target_calories.is_finite() {
        return Err(PlannerError::InvalidInput(format!(
            "calorie target for '{}' is not a finite number",
            item.name
        )));
    }

    let factor = target_calories / item.calories_per_100g;

    Ok(ScaledFoodItem {
        name: item.name.clone(),
        calories: target_calories.round(),
        protein: round_to(item.protein_per_100g * factor, PORTION_DECIMALS),
        fat: round_to(item.fat_per_100g * factor, PORTION_DECIMALS),
        carbs: round_to(item.carbs_per_100g * factor, PORTION_DECIMALS),
        quantity_grams: round_to(REFERENCE_PORTION_GRAMS * factor, PORTION_DECIMALS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientCategory;

    fn chicken() -> FoodItem {
        FoodItem::new("Chicken Breast", NutrientCategory::Protein, 165.0, 31.0, 3.6, 0.0)
    }

    #[test]
    fn test_scale_chicken_to_200() {
        let scaled = scale_item(&chicken(), 200.0).unwrap();
        assert_eq!(scaled.calories, 200.0);
        assert_eq!(scaled.protein, 37.6);
        assert_eq!(scaled.fat, 4.4);
        assert_eq!(scaled.carbs, 0.0);
        assert_eq!(scaled.quantity_grams, 121.2);
    }

    #[test]
    fn test_calories_are_rounded_target() {
        let scaled = scale_item(&chicken(), 262.5).unwrap();
        assert_eq!(scaled.calories, 263.0);

        let scaled = scale_item(&chicken(), 37.4).unwrap();
        assert_eq!(scaled.calories, 37.0);
    }

    #[test]
    fn test_zero_calorie_item_fails() {
        let water = FoodItem::new("Water", NutrientCategory::Fruit, 0.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            scale_item(&water, 100.0),
            Err(PlannerError::DivisionUndefined(name)) if name == "Water"
        ));
    }

    #[test]
    fn test_non_finite_target_fails() {
        assert!(scale_item(&chicken(), f64::INFINITY).is_err());
    }

    #[test]
    fn test_ratios_preserved() {
        let item = chicken();
        let scaled = scale_item(&item, 412.0).unwrap();
        let by_protein = scaled.protein / item.protein_per_100g;
        let by_grams = scaled.quantity_grams / 100.0;
        assert!((by_protein - by_grams).abs() < 0.01);
    }

    #[test]
    fn test_scale_is_idempotent() {
        assert_eq!(scale_item(&chicken(), 333.3).unwrap(), scale_item(&chicken(), 333.3).unwrap());
    }
}
