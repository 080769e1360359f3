use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{FoodItem, NutrientCategory};

/// One row of a catalog CSV (nutrients per 100 g).
#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    category: String,
    calories: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
}

/// Load catalog items from a CSV file.
///
/// Rows with an unknown category or non-positive calories are skipped with a
/// warning; they can never be scaled.
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut items = Vec::new();
    for (line, record) in reader.deserialize::<CatalogRow>().enumerate() {
        let row = record?;

        let category: NutrientCategory = match row.category.parse() {
            Ok(c) => c,
            Err(e) => {
                warn!(row = line + 1, name = %row.name, "skipping catalog row: {}", e);
                continue;
            }
        };

        let item = FoodItem::new(&row.name, category, row.calories, row.protein, row.fat, row.carbs);
        if !item.is_valid() {
            warn!(row = line + 1, name = %row.name, "skipping catalog row with invalid nutrients");
            continue;
        }
        items.push(item);
    }

    debug!(path = %path.display(), count = items.len(), "loaded catalog rows");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog_csv() {
        let csv = "name,category,calories,protein,fat,carbs\n\
                   Chicken Breast, proteins, 165, 31, 3.6, 0\n\
                   Olive Oil, fat, 884, 0, 100, 0\n\
                   Water, fruit, 0, 0, 0, 0\n\
                   Cake, dessert, 350, 5, 15, 50\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let items = load_catalog_csv(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Chicken Breast");
        assert_eq!(items[0].category, NutrientCategory::Protein);
        assert_eq!(items[1].category, NutrientCategory::Fat);
    }

    #[test]
    fn test_malformed_number_is_error() {
        let csv = "name,category,calories,protein,fat,carbs\nRice,carb,lots,2,0,28\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        assert!(load_catalog_csv(file.path()).is_err());
    }
}
