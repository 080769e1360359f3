mod data;
mod loader;

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{FoodItem, MealSlot, NutrientCategory};

pub use data::reference_foods;
pub use loader::load_catalog_csv;

/// Read-only, categorized reference set of foods.
///
/// Every meal slot except Extras shares the same items.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
    /// Catalog id (lowercase name) to index in `items`.
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog. Duplicate names are collapsed, last occurrence wins.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut items: Vec<FoodItem> = Vec::with_capacity(foods.len());
        let mut index = HashMap::new();

        for food in foods {
            match index.get(&food.key()) {
                Some(&i) => items[i] = food,
                None => {
                    index.insert(food.key(), items.len());
                    items.push(food);
                }
            }
        }

        Self { items, index }
    }

    /// The bundled reference table.
    pub fn bundled() -> Self {
        Self::new(reference_foods())
    }

    /// Load a replacement table from CSV.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let catalog = Self::new(load_catalog_csv(&path)?);
        info!(
            path = %path.as_ref().display(),
            items = catalog.len(),
            "loaded food catalog"
        );
        Ok(catalog)
    }

    /// Eligible items for a slot/category pair. May be empty.
    pub fn items_for(&self, slot: MealSlot, category: NutrientCategory) -> Vec<&FoodItem> {
        if slot == MealSlot::Extras {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|f| f.category == category && f.is_valid())
            .collect()
    }

    /// Look up an eligible item by catalog id for a slot/category pair.
    pub fn find(&self, slot: MealSlot, category: NutrientCategory, id: &str) -> Option<&FoodItem> {
        if slot == MealSlot::Extras {
            return None;
        }
        self.get(id)
            .filter(|f| f.category == category && f.is_valid())
    }

    /// Look up any item by catalog id (case-insensitive name).
    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.index
            .get(&id.trim().to_lowercase())
            .map(|&i| &self.items[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}
