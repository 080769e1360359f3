use crate::catalog::FoodCatalog;
use crate::models::{FoodDescriptor, MacroTotals, MealSlot, NutrientCategory, Profile};
use crate::planner::aggregate_items;
use crate::planner::{Allocation, EnergyResult, GenerationReport, MenuSession};

/// Display the energy model output for a profile.
pub fn display_energy(energy: &EnergyResult, profile: &Profile) {
    println!();
    println!("=== Daily Energy ===");
    println!();
    println!("BMR:                {:>8.1} kcal", energy.bmr);
    println!("TDEE:               {:>8.1} kcal", energy.tdee);
    println!("Deficit (0.5 kg/wk):{:>8.1} kcal", energy.daily_deficit);
    println!("Recommended:        {:>8} kcal", energy.recommended_daily_calories);

    if let Some(gap) = profile.weight_gap_kg() {
        if gap > 0.0 {
            println!("To goal:            {:>8.1} kg to lose", gap);
        } else if gap < 0.0 {
            println!("To goal:            {:>8.1} kg to gain", -gap);
        } else {
            println!("To goal:            at goal weight");
        }
    }
    println!();
}

fn display_totals(label: &str, totals: &MacroTotals) {
    println!(
        "{}: {:.0} kcal | P {:.1} g | F {:.1} g | C {:.1} g",
        label, totals.calories, totals.protein, totals.fat, totals.carbs
    );
}

fn display_allocation(allocation: &Allocation) {
    let parts: Vec<String> = MealSlot::ALL
        .iter()
        .map(|s| format!("{} {:.2}", s, allocation.meal(*s)))
        .collect();
    println!("Meal budgets: {}", parts.join(", "));

    let parts: Vec<String> = NutrientCategory::ALL
        .iter()
        .map(|c| format!("{} {:.2}", c, allocation.nutrient(*c)))
        .collect();
    println!("Category budgets: {}", parts.join(", "));
}

/// Display the session's menu grouped by meal.
pub fn display_menu<R: rand::Rng>(session: &MenuSession<'_, R>) {
    let selection = session.selection();
    if selection.is_empty() {
        println!("No menu generated (zero calorie budget or empty catalog).");
        return;
    }

    println!();
    println!("=== Menu for {:.0} kcal ===", session.daily_calories());
    display_allocation(session.allocation());

    let name_width = selection
        .entries()
        .map(|(_, _, i)| i.name.len())
        .chain(selection.extras().map(|f| f.label.len()))
        .max()
        .unwrap_or(10);

    for slot in MealSlot::ALL {
        let items: Vec<_> = selection
            .entries()
            .filter(|(s, _, _)| *s == slot)
            .collect();

        if slot == MealSlot::Extras {
            if selection.extras_len() == 0 {
                continue;
            }
            println!();
            println!("--- {} ---", slot);
            for food in selection.extras() {
                println!(
                    "  {:<10} {:<width$} {:>7} {:>5.0} kcal | P {:>5.1} F {:>5.1} C {:>5.1}",
                    "extra",
                    food.label,
                    "-",
                    food.calories,
                    food.protein,
                    food.fat,
                    food.carbs,
                    width = name_width
                );
            }
            continue;
        }

        println!();
        println!("--- {} ({:.0} kcal) ---", slot, session.allocation().meal(slot));
        for category in NutrientCategory::ALL {
            match selection.get(slot, category) {
                Some(item) => println!(
                    "  {:<10} {:<width$} {:>6.1}g {:>5.0} kcal | P {:>5.1} F {:>5.1} C {:>5.1}",
                    category.name(),
                    item.name,
                    item.quantity_grams,
                    item.calories,
                    item.protein,
                    item.fat,
                    item.carbs,
                    width = name_width
                ),
                None => println!("  {:<10} (none)", category.name()),
            }
        }
        let subtotal = aggregate_items(items.iter().map(|(_, _, i)| *i));
        display_totals("  Subtotal", &subtotal);
    }

    println!();
    println!("--- Summary ---");
    display_totals("Total", &session.totals());
    println!("Remaining: {:.0} kcal", session.remaining_calories());
    println!();
}

/// Report slots that could not be filled.
pub fn display_generation_report(report: &GenerationReport) {
    if report.skipped.is_empty() {
        return;
    }
    println!("{} slot(s) left unset:", report.skipped.len());
    for reason in &report.skipped {
        println!("  - {}", reason);
    }
}

/// Display the catalog grouped by category.
pub fn display_catalog(catalog: &FoodCatalog) {
    if catalog.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    for category in NutrientCategory::ALL {
        let items: Vec<_> = catalog.iter().filter(|f| f.category == category).collect();
        if items.is_empty() {
            continue;
        }

        println!();
        println!("=== {} ({} items) ===", category, items.len());
        for food in items {
            println!(
                "  {} - {} kcal, P:{} F:{} C:{} per 100g",
                food.name,
                food.calories_per_100g,
                food.protein_per_100g,
                food.fat_per_100g,
                food.carbs_per_100g
            );
        }
    }
    println!();
}

/// Display food search results.
pub fn display_search_results(results: &[FoodDescriptor]) {
    if results.is_empty() {
        println!("No foods found.");
        return;
    }
    for food in results {
        println!(
            "  {} - {:.0} kcal, P:{:.1} F:{:.1} C:{:.1}",
            food.label, food.calories, food.protein, food.fat, food.carbs
        );
    }
}
