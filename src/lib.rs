pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod search;
pub mod state;

pub use catalog::FoodCatalog;
pub use error::{PlannerError, Result};
pub use models::{FoodDescriptor, FoodItem, MacroTotals, MenuSelection, Profile, ScaledFoodItem};
pub use planner::{MenuSession, compute_energy};
