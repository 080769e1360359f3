mod food;
mod menu;
mod profile;

pub use food::{FoodDescriptor, FoodItem, ScaledFoodItem};
pub use menu::{MacroTotals, MealSlot, MenuRow, MenuSelection, MenuSnapshot, NutrientCategory};
pub use profile::{ActivityLevel, Biometrics, Gender, Profile};
