use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::catalog::FoodCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{
    FoodDescriptor, MacroTotals, MealSlot, MenuSelection, MenuSnapshot, NutrientCategory,
    ScaledFoodItem,
};
use crate::planner::aggregate::aggregate;
use crate::planner::allocation::{Allocation, allocate};
use crate::planner::scaling::scale_item;

/// Lifecycle of a menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Empty,
    Generated,
    Mutated,
}

/// Outcome of one generation pass.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub filled: Vec<(MealSlot, NutrientCategory)>,
    /// Slots left unset: `EmptyCategory` or `DivisionUndefined`.
    pub skipped: Vec<PlannerError>,
}

impl GenerationReport {
    /// True when no slot received an item.
    pub fn nothing_filled(&self) -> bool {
        self.filled.is_empty()
    }
}

/// One user's menu: owns the selection and every way to mutate it.
///
/// The random source is injected so that generation can be made deterministic.
/// Totals are recomputed from the selection at the end of every mutation.
pub struct MenuSession<'c, R: Rng> {
    catalog: &'c FoodCatalog,
    rng: R,
    daily_calories: f64,
    allocation: Allocation,
    selection: MenuSelection,
    totals: MacroTotals,
    state: MenuState,
}

impl<'c, R: Rng> MenuSession<'c, R> {
    pub fn new(catalog: &'c FoodCatalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            daily_calories: 0.0,
            allocation: Allocation::default(),
            selection: MenuSelection::new(),
            totals: MacroTotals::default(),
            state: MenuState::Empty,
        }
    }

    /// Build a fresh menu for `daily_calories`, replacing any previous one.
    ///
    /// Each slot/category gets one uniformly chosen catalog item scaled to its
    /// budget. Categories without items stay unset; Extras starts empty. A
    /// non-positive target leaves the session Empty.
    pub fn generate(&mut self, daily_calories: f64) -> GenerationReport {
        self.daily_calories = daily_calories;
        self.allocation = allocate(daily_calories);
        self.selection.clear();

        let catalog = self.catalog;
        let mut report = GenerationReport::default();

        if self.allocation.is_empty() {
            info!(daily_calories, "no calorie budget, menu left empty");
            self.state = MenuState::Empty;
            self.refresh_totals();
            return report;
        }

        for slot in MealSlot::ALL {
            for category in NutrientCategory::ALL {
                let candidates = catalog.items_for(slot, category);
                let Some(food) = candidates.choose(&mut self.rng) else {
                    if slot != MealSlot::Extras {
                        debug!(%slot, %category, "no eligible catalog items");
                        report
                            .skipped
                            .push(PlannerError::EmptyCategory { slot, category });
                    }
                    continue;
                };

                let target = self.allocation.target_for(slot, category);
                match scale_item(food, target) {
                    Ok(scaled) => {
                        debug!(%slot, %category, food = %scaled.name, grams = scaled.quantity_grams, "selected");
                        self.selection.set(slot, category, scaled);
                        report.filled.push((slot, category));
                    }
                    Err(e) => {
                        warn!(%slot, %category, "leaving slot unset: {}", e);
                        report.skipped.push(e);
                    }
                }
            }
        }

        self.state = MenuState::Generated;
        self.refresh_totals();
        info!(
            daily_calories,
            filled = report.filled.len(),
            skipped = report.skipped.len(),
            "generated menu"
        );
        report
    }

    /// Swap one slot/category for a specific catalog item.
    ///
    /// The item is scaled to the slot's own budget, not the previous item's
    /// calories. A miss leaves the menu unchanged.
    pub fn replace(
        &mut self,
        slot: MealSlot,
        category: NutrientCategory,
        item_id: &str,
    ) -> Result<ScaledFoodItem> {
        if self.state == MenuState::Empty {
            return Err(PlannerError::NoMenu);
        }

        let catalog = self.catalog;
        let food = catalog
            .find(slot, category, item_id)
            .ok_or_else(|| PlannerError::LookupMiss(format!("{} for {} {}", item_id, slot, category)))?;

        let target = self.allocation.target_for(slot, category);
        let scaled = scale_item(food, target)?;

        debug!(%slot, %category, food = %scaled.name, "replaced");
        self.selection.set(slot, category, scaled.clone());
        self.state = MenuState::Mutated;
        self.refresh_totals();

        Ok(scaled)
    }

    /// Add an externally resolved food to Extras, as reported (no scaling).
    ///
    /// Returns the entry it overwrote, if one had the same name. Descriptors
    /// with an empty label or non-finite/negative values are rejected and the
    /// menu is left unchanged.
    pub fn add_extra(&mut self, food: FoodDescriptor) -> Result<Option<FoodDescriptor>> {
        if !food.is_valid() {
            warn!(food = %food.label, "rejecting extra with invalid nutrients");
            return Err(PlannerError::InvalidInput(format!(
                "extra '{}' needs a name and finite, non-negative nutrients",
                food.label
            )));
        }

        debug!(food = %food.label, calories = food.calories, "adding extra");
        let previous = self.selection.insert_extra(food);
        self.mark_mutated();
        self.refresh_totals();
        Ok(previous)
    }

    /// Remove an extra by name. Absent names are a no-op.
    pub fn remove_extra(&mut self, name: &str) -> Option<FoodDescriptor> {
        let removed = self.selection.remove_extra(name);
        match &removed {
            Some(food) => {
                debug!(food = %food.label, "removed extra");
                self.mark_mutated();
                self.refresh_totals();
            }
            None => debug!(name, "no extra to remove"),
        }
        removed
    }

    /// Discard the menu and regenerate with the current calorie target.
    pub fn reset(&mut self) -> GenerationReport {
        self.selection.clear();
        self.state = MenuState::Empty;
        self.refresh_totals();
        self.generate(self.daily_calories)
    }

    pub fn totals(&self) -> MacroTotals {
        self.totals
    }

    pub fn selection(&self) -> &MenuSelection {
        &self.selection
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    pub fn catalog(&self) -> &'c FoodCatalog {
        self.catalog
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn daily_calories(&self) -> f64 {
        self.daily_calories
    }

    pub fn target_for(&self, slot: MealSlot, category: NutrientCategory) -> f64 {
        self.allocation.target_for(slot, category)
    }

    /// Daily target minus calories currently on the menu.
    pub fn remaining_calories(&self) -> f64 {
        self.daily_calories.max(0.0) - self.totals.calories
    }

    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot::from_selection(
            &self.selection,
            self.daily_calories,
            self.allocation.meal_calories.clone(),
            self.totals,
        )
    }

    fn mark_mutated(&mut self) {
        if self.state == MenuState::Generated {
            self.state = MenuState::Mutated;
        }
    }

    fn refresh_totals(&mut self) {
        self.totals = aggregate(&self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            FoodItem::new("Chicken Breast", NutrientCategory::Protein, 165.0, 31.0, 3.6, 0.0),
            FoodItem::new("Tofu", NutrientCategory::Protein, 76.0, 8.0, 4.8, 1.9),
            FoodItem::new("Rice", NutrientCategory::Carb, 130.0, 2.7, 0.3, 28.0),
            FoodItem::new("Broccoli", NutrientCategory::Vegetable, 34.0, 2.8, 0.4, 7.0),
            FoodItem::new("Apple", NutrientCategory::Fruit, 52.0, 0.3, 0.2, 14.0),
        ])
    }

    fn latte() -> FoodDescriptor {
        FoodDescriptor {
            label: "Latte".to_string(),
            calories: 190.0,
            protein: 10.0,
            fat: 7.0,
            carbs: 19.0,
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let catalog = catalog();
        let session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        assert_eq!(session.state(), MenuState::Empty);
        assert!(session.selection().is_empty());
        assert_eq!(session.totals(), MacroTotals::default());
    }

    #[test]
    fn test_generate_fills_eligible_slots() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(7));
        let report = session.generate(2000.0);

        // 3 meals x 4 stocked categories; Fat has no items.
        assert_eq!(report.filled.len(), 12);
        assert_eq!(report.skipped.len(), 3);
        assert!(report.skipped.iter().all(|e| matches!(
            e,
            PlannerError::EmptyCategory { category: NutrientCategory::Fat, .. }
        )));
        assert_eq!(session.state(), MenuState::Generated);
        assert_eq!(session.selection().extras_len(), 0);
        assert!(session.selection().get(MealSlot::Lunch, NutrientCategory::Fat).is_none());
    }

    #[test]
    fn test_generated_calories_match_targets() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(3));
        session.generate(2000.0);

        for (slot, category, item) in session.selection().entries() {
            assert_eq!(item.calories, session.target_for(slot, category).round());
        }
        assert_eq!(session.totals(), aggregate(session.selection()));
    }

    #[test]
    fn test_same_seed_same_menu() {
        let catalog = catalog();
        let mut a = MenuSession::new(&catalog, StdRng::seed_from_u64(42));
        let mut b = MenuSession::new(&catalog, StdRng::seed_from_u64(42));
        a.generate(1800.0);
        b.generate(1800.0);

        let names_a: Vec<_> = a.selection().entries().map(|(_, _, i)| i.name.clone()).collect();
        let names_b: Vec<_> = b.selection().entries().map(|(_, _, i)| i.name.clone()).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn test_zero_budget_stays_empty() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        let report = session.generate(-550.0);

        assert!(report.nothing_filled());
        assert!(report.skipped.is_empty());
        assert_eq!(session.state(), MenuState::Empty);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_replace_scales_to_slot_budget() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        session.generate(2000.0);

        let item = session
            .replace(MealSlot::Lunch, NutrientCategory::Protein, "tofu")
            .unwrap();
        assert_eq!(item.name, "Tofu");
        assert_eq!(item.calories, 280.0);
        assert_eq!(session.state(), MenuState::Mutated);
        assert_eq!(session.totals(), aggregate(session.selection()));
    }

    #[test]
    fn test_replace_miss_is_noop() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        session.generate(2000.0);
        let before = session.totals();

        let err = session
            .replace(MealSlot::Lunch, NutrientCategory::Protein, "rice")
            .unwrap_err();
        assert!(matches!(err, PlannerError::LookupMiss(_)));
        assert_eq!(session.totals(), before);
        assert_eq!(session.state(), MenuState::Generated);
    }

    #[test]
    fn test_replace_before_generate() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        assert!(matches!(
            session.replace(MealSlot::Lunch, NutrientCategory::Protein, "tofu"),
            Err(PlannerError::NoMenu)
        ));
    }

    #[test]
    fn test_extras_add_overwrite_remove() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        session.generate(2000.0);
        let base = session.totals().calories;

        assert!(session.add_extra(latte()).unwrap().is_none());
        assert!((session.totals().calories - (base + 190.0)).abs() < 1e-9);

        let mut large = latte();
        large.calories = 250.0;
        assert!(session.add_extra(large).unwrap().is_some());
        assert!((session.totals().calories - (base + 250.0)).abs() < 1e-9);

        assert!(session.remove_extra("latte").is_some());
        assert!(session.remove_extra("latte").is_none());
        assert!((session.totals().calories - base).abs() < 1e-9);
        assert_eq!(session.state(), MenuState::Mutated);
    }

    #[test]
    fn test_invalid_extras_rejected() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        session.generate(2000.0);
        let before = session.totals();

        let mut bad = latte();
        bad.label = "Bad".to_string();
        bad.calories = f64::NAN;
        bad.protein = -5.0;
        assert!(matches!(session.add_extra(bad), Err(PlannerError::InvalidInput(_))));

        let mut unnamed = latte();
        unnamed.label = String::new();
        assert!(matches!(session.add_extra(unnamed), Err(PlannerError::InvalidInput(_))));

        let mut infinite = latte();
        infinite.calories = f64::INFINITY;
        assert!(session.add_extra(infinite).is_err());

        assert_eq!(session.selection().extras_len(), 0);
        assert_eq!(session.totals(), before);
        assert!(session.totals().calories.is_finite());
        assert_eq!(session.state(), MenuState::Generated);
    }

    #[test]
    fn test_reset_regenerates() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        session.generate(2000.0);
        session.add_extra(latte()).unwrap();

        let report = session.reset();
        assert_eq!(report.filled.len(), 12);
        assert_eq!(session.state(), MenuState::Generated);
        assert_eq!(session.selection().extras_len(), 0);
        assert_eq!(session.totals(), aggregate(session.selection()));
    }

    #[test]
    fn test_remaining_calories() {
        let catalog = catalog();
        let mut session = MenuSession::new(&catalog, StdRng::seed_from_u64(1));
        session.generate(2000.0);

        // Fat (15%) and Extras (10%) budgets are unfilled.
        let expected = 2000.0 - session.totals().calories;
        assert!((session.remaining_calories() - expected).abs() < 1e-9);
        assert!(session.remaining_calories() > 0.0);
    }
}
