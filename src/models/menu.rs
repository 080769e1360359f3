use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::{FoodDescriptor, ScaledFoodItem};
use crate::planner::constants::*;

/// A named meal period with its own share of the daily calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Extras,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Extras,
    ];

    /// Fraction of the daily calories given to this meal.
    pub fn share(self) -> f64 {
        match self {
            MealSlot::Breakfast => BREAKFAST_SHARE,
            MealSlot::Lunch => LUNCH_SHARE,
            MealSlot::Dinner => DINNER_SHARE,
            MealSlot::Extras => EXTRAS_SHARE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Extras => "Extras",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealSlot {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "extras" | "extra" | "snacks" => Ok(MealSlot::Extras),
            other => Err(PlannerError::InvalidInput(format!("unknown meal slot '{}'", other))),
        }
    }
}

/// A food grouping used to split a meal's calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientCategory {
    Protein,
    Fat,
    Carb,
    Vegetable,
    Fruit,
}

impl NutrientCategory {
    pub const ALL: [NutrientCategory; 5] = [
        NutrientCategory::Protein,
        NutrientCategory::Fat,
        NutrientCategory::Carb,
        NutrientCategory::Vegetable,
        NutrientCategory::Fruit,
    ];

    /// Fraction of a meal's calories given to this category.
    pub fn share(self) -> f64 {
        match self {
            NutrientCategory::Protein => PROTEIN_SHARE,
            NutrientCategory::Fat => FAT_SHARE,
            NutrientCategory::Carb => CARB_SHARE,
            NutrientCategory::Vegetable => VEGETABLE_SHARE,
            NutrientCategory::Fruit => FRUIT_SHARE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NutrientCategory::Protein => "Protein",
            NutrientCategory::Fat => "Fat",
            NutrientCategory::Carb => "Carb",
            NutrientCategory::Vegetable => "Vegetable",
            NutrientCategory::Fruit => "Fruit",
        }
    }
}

impl fmt::Display for NutrientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NutrientCategory {
    type Err = PlannerError;

    /// Accepts singular and plural group names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "protein" | "proteins" => Ok(NutrientCategory::Protein),
            "fat" | "fats" => Ok(NutrientCategory::Fat),
            "carb" | "carbs" => Ok(NutrientCategory::Carb),
            "vegetable" | "vegetables" => Ok(NutrientCategory::Vegetable),
            "fruit" | "fruits" => Ok(NutrientCategory::Fruit),
            other => Err(PlannerError::InvalidInput(format!(
                "unknown nutrient category '{}'",
                other
            ))),
        }
    }
}

/// Aggregate macro totals. Always derived from a selection, never kept as a counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub calories: f64,
}

impl Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, rhs: MacroTotals) -> MacroTotals {
        MacroTotals {
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
            calories: self.calories + rhs.calories,
        }
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = MacroTotals>>(iter: I) -> Self {
        iter.fold(MacroTotals::default(), |acc, m| acc + m)
    }
}

/// The day's menu: a slot/category grid of scaled items plus free-form extras.
///
/// Mutation is crate-private; sessions own the only writable copy.
#[derive(Debug, Clone, Default)]
pub struct MenuSelection {
    meals: BTreeMap<MealSlot, BTreeMap<NutrientCategory, ScaledFoodItem>>,
    /// Extras keyed by lowercase label.
    extras: BTreeMap<String, FoodDescriptor>,
}

impl MenuSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: MealSlot, category: NutrientCategory) -> Option<&ScaledFoodItem> {
        self.meals.get(&slot).and_then(|m| m.get(&category))
    }

    /// All populated grid entries in slot, then category order.
    pub fn entries(&self) -> impl Iterator<Item = (MealSlot, NutrientCategory, &ScaledFoodItem)> {
        self.meals
            .iter()
            .flat_map(|(slot, cats)| cats.iter().map(move |(cat, item)| (*slot, *cat, item)))
    }

    pub fn extras(&self) -> impl Iterator<Item = &FoodDescriptor> {
        self.extras.values()
    }

    pub fn extra(&self, name: &str) -> Option<&FoodDescriptor> {
        self.extras.get(&name.trim().to_lowercase())
    }

    /// Number of populated grid entries (extras excluded).
    pub fn populated(&self) -> usize {
        self.meals.values().map(BTreeMap::len).sum()
    }

    pub fn extras_len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.populated() == 0 && self.extras.is_empty()
    }

    pub(crate) fn set(
        &mut self,
        slot: MealSlot,
        category: NutrientCategory,
        item: ScaledFoodItem,
    ) -> Option<ScaledFoodItem> {
        self.meals.entry(slot).or_default().insert(category, item)
    }

    pub(crate) fn insert_extra(&mut self, food: FoodDescriptor) -> Option<FoodDescriptor> {
        self.extras.insert(food.key(), food)
    }

    pub(crate) fn remove_extra(&mut self, name: &str) -> Option<FoodDescriptor> {
        self.extras.remove(&name.trim().to_lowercase())
    }

    pub(crate) fn clear(&mut self) {
        self.meals.clear();
        self.extras.clear();
    }
}

/// One exported menu line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRow {
    pub slot: String,
    pub category: String,
    pub name: String,
    pub quantity_grams: Option<f64>,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Flat, serializable view of a session's menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSnapshot {
    pub daily_calories: f64,
    pub meal_targets: BTreeMap<MealSlot, f64>,
    pub rows: Vec<MenuRow>,
    pub totals: MacroTotals,
}

impl MenuSnapshot {
    pub fn from_selection(
        selection: &MenuSelection,
        daily_calories: f64,
        meal_targets: BTreeMap<MealSlot, f64>,
        totals: MacroTotals,
    ) -> Self {
        let grid = selection.entries().map(|(slot, category, item)| MenuRow {
            slot: slot.to_string(),
            category: category.to_string(),
            name: item.name.clone(),
            quantity_grams: Some(item.quantity_grams),
            calories: item.calories,
            protein: item.protein,
            fat: item.fat,
            carbs: item.carbs,
        });
        let extras = selection.extras().map(|food| MenuRow {
            slot: MealSlot::Extras.to_string(),
            category: "extra".to_string(),
            name: food.label.clone(),
            quantity_grams: None,
            calories: food.calories,
            protein: food.protein,
            fat: food.fat,
            carbs: food.carbs,
        });

        Self {
            daily_calories,
            meal_targets,
            rows: grid.chain(extras).collect(),
            totals,
        }
    }
}
