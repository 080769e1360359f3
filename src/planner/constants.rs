// ─────────────────────────────────────────────────────────────────────────────
// Energy model
// ─────────────────────────────────────────────────────────────────────────────

/// Revised Harris-Benedict BMR coefficients: intercept, weight, height, age.
pub const MALE_BMR: [f64; 4] = [88.362, 13.397, 4.799, 5.677];
pub const FEMALE_BMR: [f64; 4] = [447.593, 9.247, 3.098, 4.330];

/// TDEE multipliers by activity level.
pub const NOT_VERY_ACTIVE_MULT: f64 = 1.2;
pub const LIGHTLY_ACTIVE_MULT: f64 = 1.375;
pub const MODERATELY_ACTIVE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;
pub const VERY_ACTIVE_MULT: f64 = 1.9;

/// Used when the activity level is missing or unrecognized.
pub const DEFAULT_ACTIVITY_MULT: f64 = NOT_VERY_ACTIVE_MULT;

/// Energy stored in one kilogram of body fat.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Fixed weight-loss pace applied to every profile.
pub const WEEKLY_LOSS_KG: f64 = 0.5;

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Daily calorie deficit for the fixed loss pace (550 kcal).
pub const DAILY_DEFICIT: f64 = WEEKLY_LOSS_KG * KCAL_PER_KG / DAYS_PER_WEEK;

// ─────────────────────────────────────────────────────────────────────────────
// Allocation shares (each table sums to 1.0)
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.40;
pub const DINNER_SHARE: f64 = 0.25;
pub const EXTRAS_SHARE: f64 = 0.10;

pub const PROTEIN_SHARE: f64 = 0.35;
pub const FAT_SHARE: f64 = 0.15;
pub const CARB_SHARE: f64 = 0.35;
pub const VEGETABLE_SHARE: f64 = 0.075;
pub const FRUIT_SHARE: f64 = 0.075;

/// Allowed float drift when checking that a share table sums to 1.0.
pub const SHARE_SUM_TOLERANCE: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// Rounding
// ─────────────────────────────────────────────────────────────────────────────

/// Decimals kept for meal and nutrient budgets.
pub const BUDGET_DECIMALS: u32 = 2;

/// Decimals kept for scaled macros and portion grams.
pub const PORTION_DECIMALS: u32 = 1;

/// Reference portion size for catalog nutrients.
pub const REFERENCE_PORTION_GRAMS: f64 = 100.0;

/// Round to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSlot, NutrientCategory};

    #[test]
    fn test_meal_shares_sum_to_one() {
        let sum: f64 = MealSlot::ALL.iter().map(|s| s.share()).sum();
        assert!((sum - 1.0).abs() < SHARE_SUM_TOLERANCE);
    }

    #[test]
    fn test_nutrient_shares_sum_to_one() {
        let sum: f64 = NutrientCategory::ALL.iter().map(|c| c.share()).sum();
        assert!((sum - 1.0).abs() < SHARE_SUM_TOLERANCE);
    }

    #[test]
    fn test_daily_deficit() {
        assert!((DAILY_DEFICIT - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(37.5757, 1), 37.6);
        assert_eq!(round_to(121.2121, 1), 121.2);
        assert_eq!(round_to(812.346, 2), 812.35);
    }
}
