use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{MenuSnapshot, Profile};

/// Load a profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Save a profile to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &Profile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a menu snapshot (rows, meal targets, totals) as JSON.
pub fn save_menu_json<P: AsRef<Path>>(path: P, snapshot: &MenuSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write menu rows as CSV; extras carry no portion size.
pub fn write_menu_csv<P: AsRef<Path>>(path: P, snapshot: &MenuSnapshot) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "slot",
        "category",
        "name",
        "quantity_g",
        "calories",
        "protein",
        "fat",
        "carbs",
    ])?;

    for row in &snapshot.rows {
        wtr.write_record([
            row.slot.clone(),
            row.category.clone(),
            row.name.clone(),
            row.quantity_grams
                .map(|g| format!("{:.1}", g))
                .unwrap_or_default(),
            format!("{:.0}", row.calories),
            format!("{:.1}", row.protein),
            format!("{:.1}", row.fat),
            format!("{:.1}", row.carbs),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
