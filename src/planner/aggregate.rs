use crate::models::{FoodDescriptor, MacroTotals, MenuSelection, ScaledFoodItem};

/// Sum macros over every populated grid entry and every extra.
pub fn aggregate(selection: &MenuSelection) -> MacroTotals {
    let grid = selection.entries().map(|(_, _, item)| item.macros());
    let extras = selection.extras().map(FoodDescriptor::macros);
    grid.chain(extras).sum()
}

/// Sum macros over a list of scaled items.
pub fn aggregate_items<'a, I>(items: I) -> MacroTotals
where
    I: IntoIterator<Item = &'a ScaledFoodItem>,
{
    items.into_iter().map(ScaledFoodItem::macros).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSlot, NutrientCategory};

    fn scaled(name: &str, calories: f64, protein: f64, fat: f64, carbs: f64) -> ScaledFoodItem {
        ScaledFoodItem {
            name: name.to_string(),
            calories,
            protein,
            fat,
            carbs,
            quantity_grams: 100.0,
        }
    }

    #[test]
    fn test_empty_selection_is_zero() {
        assert_eq!(aggregate(&MenuSelection::new()), MacroTotals::default());
    }

    #[test]
    fn test_aggregate_grid_and_extras() {
        let mut selection = MenuSelection::new();
        selection.set(
            MealSlot::Breakfast,
            NutrientCategory::Protein,
            scaled("Eggs", 175.0, 14.7, 12.4, 1.2),
        );
        selection.set(
            MealSlot::Lunch,
            NutrientCategory::Carb,
            scaled("Rice", 280.0, 5.8, 0.6, 60.3),
        );
        selection.insert_extra(FoodDescriptor {
            label: "Latte".to_string(),
            calories: 190.0,
            protein: 10.0,
            fat: 7.0,
            carbs: 19.0,
        });

        let totals = aggregate(&selection);
        assert!((totals.calories - 645.0).abs() < 1e-9);
        assert!((totals.protein - 30.5).abs() < 1e-9);
        assert!((totals.fat - 20.0).abs() < 1e-9);
        assert!((totals.carbs - 80.5).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_items() {
        let items = vec![scaled("A", 100.0, 1.0, 1.0, 1.0), scaled("B", 50.0, 2.0, 0.0, 3.0)];
        let totals = aggregate_items(&items);
        assert_eq!(totals.calories, 150.0);
        assert_eq!(totals.carbs, 4.0);
    }
}
