use thiserror::Error;

use crate::models::{MealSlot, NutrientCategory};

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A profile field needed for the energy model is missing or not a
    /// positive finite number.
    #[error("Cannot compute energy target: {0} is missing or invalid")]
    Unavailable(&'static str),

    #[error("No catalog items for {category} at {slot}")]
    EmptyCategory {
        slot: MealSlot,
        category: NutrientCategory,
    },

    #[error("Cannot scale '{0}': reference portion has zero calories")]
    DivisionUndefined(String),

    #[error("Not found: {0}")]
    LookupMiss(String),

    #[error("No menu has been generated yet")]
    NoMenu,

    #[error("Food search failed: {0}")]
    SearchFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
