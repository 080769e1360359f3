use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, FoodDescriptor, FoodItem, MealSlot, NutrientCategory, Profile};

/// Actions offered by the interactive session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Show,
    Replace,
    AddExtra,
    RemoveExtra,
    Reset,
    Quit,
}

impl SessionAction {
    const ALL: [SessionAction; 6] = [
        SessionAction::Show,
        SessionAction::Replace,
        SessionAction::AddExtra,
        SessionAction::RemoveExtra,
        SessionAction::Reset,
        SessionAction::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            SessionAction::Show => "Show menu",
            SessionAction::Replace => "Replace an item",
            SessionAction::AddExtra => "Add an extra",
            SessionAction::RemoveExtra => "Remove an extra",
            SessionAction::Reset => "Regenerate menu",
            SessionAction::Quit => "Quit",
        }
    }
}

fn prompt_number(prompt: &str, default: Option<String>) -> Result<f64> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(d) = default {
        input = input.default(d);
    }
    let raw = input.interact_text()?;

    raw.trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", raw.trim())))
}

/// Prompt for every profile field, using `current` values as defaults.
pub fn prompt_profile(current: &Profile) -> Result<Profile> {
    let genders = ["male", "female", "other"];
    let gender_default = current
        .gender
        .as_deref()
        .and_then(|g| genders.iter().position(|x| x.eq_ignore_ascii_case(g)))
        .unwrap_or(0);
    let gender = Select::new()
        .with_prompt("Gender")
        .items(&genders)
        .default(gender_default)
        .interact()?;

    let height = prompt_number("Height (cm)", current.height.map(|v| v.to_string()))?;
    let weight = prompt_number("Current weight (kg)", current.weight.map(|v| v.to_string()))?;
    let goal_weight = prompt_number("Goal weight (kg)", current.goal_weight.map(|v| v.to_string()))?;
    let age = prompt_number("Age", current.age.map(|v| v.to_string()))?;

    let levels = [
        ActivityLevel::NotVeryActive,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];
    let tokens: Vec<&str> = levels.iter().map(|l| l.token()).collect();
    let level_default = current
        .activity_level
        .as_deref()
        .and_then(ActivityLevel::parse)
        .and_then(|l| levels.iter().position(|x| *x == l))
        .unwrap_or(0);
    let level = Select::new()
        .with_prompt("Activity level")
        .items(&tokens)
        .default(level_default)
        .interact()?;

    Ok(Profile {
        gender: Some(genders[gender].to_string()),
        height: Some(height),
        weight: Some(weight),
        goal_weight: Some(goal_weight),
        activity_level: Some(levels[level].token().to_string()),
        age: Some(age),
    })
}

/// Prompt for the next session action.
pub fn prompt_session_action() -> Result<SessionAction> {
    let labels: Vec<&str> = SessionAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SessionAction::ALL[selection])
}

/// Prompt for a meal slot and nutrient category (Extras excluded).
pub fn prompt_slot_category() -> Result<(MealSlot, NutrientCategory)> {
    let slots = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];
    let slot = Select::new()
        .with_prompt("Meal")
        .items(&slots)
        .default(0)
        .interact()?;

    let category = Select::new()
        .with_prompt("Category")
        .items(&NutrientCategory::ALL)
        .default(0)
        .interact()?;

    Ok((slots[slot], NutrientCategory::ALL[category]))
}

/// Pick one catalog item; returns its catalog id.
pub fn prompt_catalog_item(items: &[&FoodItem]) -> Result<Option<String>> {
    if items.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = items
        .iter()
        .map(|f| format!("{} ({} kcal/100g)", f.name, f.calories_per_100g))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Replace with")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(items.get(selection).map(|f| f.key()))
}

/// Prompt for a free-text food search.
pub fn prompt_search_query() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search food (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Pick one search result.
pub fn prompt_search_pick(results: &[FoodDescriptor]) -> Result<Option<FoodDescriptor>> {
    let mut options: Vec<String> = results
        .iter()
        .map(|f| format!("{} - {:.0} kcal", f.label, f.calories))
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(results.get(selection).cloned())
}

/// Pick one of the current extras by name.
pub fn prompt_extra_to_remove(names: &[String]) -> Result<Option<String>> {
    if names.is_empty() {
        return Ok(None);
    }

    let mut options = names.to_vec();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which extra?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(names.get(selection).cloned())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
