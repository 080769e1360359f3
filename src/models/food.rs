use serde::{Deserialize, Serialize};

use crate::models::{MacroTotals, NutrientCategory};

/// A catalog reference food with nutrients per 100 g portion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    pub category: NutrientCategory,

    #[serde(rename = "calories")]
    pub calories_per_100g: f64,

    #[serde(rename = "protein")]
    pub protein_per_100g: f64,

    #[serde(rename = "fat")]
    pub fat_per_100g: f64,

    #[serde(rename = "carbs")]
    pub carbs_per_100g: f64,
}

impl FoodItem {
    pub fn new(
        name: &str,
        category: NutrientCategory,
        calories: f64,
        protein: f64,
        fat: f64,
        carbs: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            calories_per_100g: calories,
            protein_per_100g: protein,
            fat_per_100g: fat,
            carbs_per_100g: carbs,
        }
    }

    /// Catalog id (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Only items with positive reference calories can be rescaled.
    #[inline]
    pub fn is_scalable(&self) -> bool {
        self.calories_per_100g.is_finite() && self.calories_per_100g > 0.0
    }

    /// Scalable, with finite non-negative macros.
    pub fn is_valid(&self) -> bool {
        self.is_scalable()
            && [self.protein_per_100g, self.fat_per_100g, self.carbs_per_100g]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}

/// A catalog item rescaled to a calorie target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledFoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub quantity_grams: f64,
}

impl ScaledFoodItem {
    pub fn macros(&self) -> MacroTotals {
        MacroTotals {
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
            calories: self.calories,
        }
    }
}

/// A food as reported by an external search, in absolute values for one serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDescriptor {
    #[serde(alias = "name")]
    pub label: String,

    #[serde(alias = "energy", alias = "kcal")]
    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default)]
    pub carbs: f64,
}

impl FoodDescriptor {
    /// Extras are keyed by case-insensitive label.
    pub fn key(&self) -> String {
        self.label.trim().to_lowercase()
    }

    /// A non-empty label and finite, non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        !self.label.trim().is_empty()
            && [self.calories, self.protein, self.fat, self.carbs]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
    }

    pub fn macros(&self) -> MacroTotals {
        MacroTotals {
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
            calories: self.calories,
        }
    }
}
