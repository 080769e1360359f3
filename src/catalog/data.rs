use crate::models::{FoodItem, NutrientCategory};

use NutrientCategory::{Carb, Fruit, Protein, Vegetable};

/// Bundled reference table: name, category, kcal, protein, fat, carbs per 100 g.
const REFERENCE_FOODS: &[(&str, NutrientCategory, f64, f64, f64, f64)] = &[
    ("Chicken Breast", Protein, 165.0, 31.0, 3.6, 0.0),
    ("Salmon", Protein, 208.0, 20.0, 13.0, 0.0),
    ("Eggs", Protein, 155.0, 13.0, 11.0, 1.1),
    ("Greek Yogurt", Protein, 59.0, 10.0, 0.4, 3.6),
    ("Tuna", Protein, 116.0, 26.0, 0.8, 0.0),
    ("Lean Beef", Protein, 176.0, 20.0, 10.0, 0.0),
    ("Tofu", Protein, 76.0, 8.0, 4.8, 1.9),
    ("Cottage Cheese", Protein, 98.0, 11.0, 4.3, 3.4),
    ("Turkey Breast", Protein, 135.0, 30.0, 1.0, 0.0),
    ("Shrimp", Protein, 99.0, 24.0, 0.3, 0.2),
    ("Brown Rice", Carb, 112.0, 2.6, 0.9, 23.5),
    ("White Rice", Carb, 130.0, 2.7, 0.3, 28.0),
    ("Oats", Carb, 389.0, 16.9, 6.9, 66.3),
    ("Whole Wheat Bread", Carb, 247.0, 13.0, 3.4, 41.0),
    ("Pasta", Carb, 158.0, 5.8, 0.9, 31.0),
    ("Sweet Potato", Carb, 90.0, 2.0, 0.2, 21.0),
    ("Potato", Carb, 87.0, 1.9, 0.1, 20.0),
    ("Quinoa", Carb, 120.0, 4.4, 1.9, 21.3),
    ("Couscous", Carb, 112.0, 3.8, 0.2, 23.0),
    ("Buckwheat", Carb, 92.0, 3.4, 0.6, 20.0),
    ("Broccoli", Vegetable, 34.0, 2.8, 0.4, 7.0),
    ("Spinach", Vegetable, 23.0, 2.9, 0.4, 3.6),
    ("Carrot", Vegetable, 41.0, 0.9, 0.2, 10.0),
    ("Tomato", Vegetable, 18.0, 0.9, 0.2, 3.9),
    ("Cucumber", Vegetable, 15.0, 0.7, 0.1, 3.6),
    ("Bell Pepper", Vegetable, 31.0, 1.0, 0.3, 6.0),
    ("Zucchini", Vegetable, 17.0, 1.2, 0.3, 3.1),
    ("Green Beans", Vegetable, 31.0, 1.8, 0.2, 7.0),
    ("Cauliflower", Vegetable, 25.0, 1.9, 0.3, 5.0),
    ("Lettuce", Vegetable, 15.0, 1.4, 0.2, 2.9),
    ("Apple", Fruit, 52.0, 0.3, 0.2, 14.0),
    ("Banana", Fruit, 89.0, 1.1, 0.3, 23.0),
    ("Orange", Fruit, 47.0, 0.9, 0.1, 12.0),
    ("Strawberries", Fruit, 32.0, 0.7, 0.3, 7.7),
    ("Blueberries", Fruit, 57.0, 0.7, 0.3, 14.0),
    ("Grapes", Fruit, 69.0, 0.7, 0.2, 18.0),
    ("Pear", Fruit, 57.0, 0.4, 0.1, 15.0),
    ("Kiwi", Fruit, 61.0, 1.1, 0.5, 15.0),
    ("Mango", Fruit, 60.0, 0.8, 0.4, 15.0),
    ("Pineapple", Fruit, 50.0, 0.5, 0.1, 13.0),
];

pub fn reference_foods() -> Vec<FoodItem> {
    REFERENCE_FOODS
        .iter()
        .map(|&(name, category, kcal, protein, fat, carbs)| {
            FoodItem::new(name, category, kcal, protein, fat, carbs)
        })
        .collect()
}
