pub mod aggregate;
pub mod allocation;
pub mod constants;
pub mod energy;
pub mod scaling;
pub mod session;

pub use aggregate::{aggregate, aggregate_items};
pub use allocation::{Allocation, allocate};
pub use constants::*;
pub use energy::{EnergyResult, activity_multiplier, basal_metabolic_rate, compute_energy};
pub use scaling::scale_item;
pub use session::{GenerationReport, MenuSession, MenuState};
