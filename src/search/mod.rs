use std::fs;
use std::path::Path;

use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::FoodDescriptor;

/// Minimum Jaro-Winkler similarity for a fuzzy match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Default number of candidates returned per query.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// A food lookup service used to resolve Extras.
///
/// Results are absolute per-serving values and are stored without scaling.
pub trait FoodSearch {
    fn search(&self, query: &str) -> Result<Vec<FoodDescriptor>>;
}

/// Fuzzy search over a local table of foods.
#[derive(Debug, Clone)]
pub struct LocalFoodSearch {
    foods: Vec<FoodDescriptor>,
    limit: usize,
}

impl LocalFoodSearch {
    pub fn new(foods: Vec<FoodDescriptor>) -> Self {
        Self {
            foods,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Load a JSON array of food descriptors.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let foods: Vec<FoodDescriptor> = serde_json::from_str(&content)?;
        Ok(Self::new(foods))
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl Default for LocalFoodSearch {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FoodSearch for LocalFoodSearch {
    /// Exact (case-insensitive) matches first, then fuzzy matches by score.
    fn search(&self, query: &str) -> Result<Vec<FoodDescriptor>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        if self.foods.is_empty() {
            return Err(PlannerError::SearchFailed("no food table loaded".to_string()));
        }

        let mut scored: Vec<(&FoodDescriptor, f64)> = self
            .foods
            .iter()
            .map(|f| {
                let label = f.label.to_lowercase();
                let score = if label == query {
                    f64::INFINITY
                } else {
                    jaro_winkler(&label, &query)
                };
                (f, score)
            })
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!(query = %query, hits = scored.len(), "food search");
        Ok(scored
            .into_iter()
            .take(self.limit)
            .map(|(f, _)| f.clone())
            .collect())
    }
}
