use serde::Serialize;

use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, Profile};
use crate::planner::constants::*;

/// Energy requirement derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyResult {
    pub bmr: f64,
    pub tdee: f64,
    pub daily_deficit: f64,
    pub recommended_daily_calories: i64,
}

/// Basal metabolic rate, branched on gender. Unspecified gender yields 0.
pub fn basal_metabolic_rate(gender: Gender, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    let [intercept, w, h, a] = match gender {
        Gender::Male => MALE_BMR,
        Gender::Female => FEMALE_BMR,
        Gender::Unspecified => return 0.0,
    };
    intercept + w * weight_kg + h * height_cm - a * age
}

/// Activity multiplier; unknown levels fall back to the sedentary value.
pub fn activity_multiplier(level: Option<ActivityLevel>) -> f64 {
    level.map_or(DEFAULT_ACTIVITY_MULT, ActivityLevel::multiplier)
}

/// Compute BMR, TDEE and the recommended daily calorie target.
///
/// Fails with `Unavailable` when a biometric field is missing or invalid, or
/// when the biometrics are so large that the target leaves the `i64` range.
/// The deficit is the fixed 0.5 kg/week pace and does not depend on the goal
/// weight.
pub fn compute_energy(profile: &Profile) -> Result<EnergyResult> {
    let bio = profile.biometrics()?;

    let bmr = basal_metabolic_rate(bio.gender, bio.weight_kg, bio.height_cm, bio.age);
    let tdee = bmr * activity_multiplier(bio.activity);
    let target = (tdee - DAILY_DEFICIT).round();
    if !(bmr.is_finite() && tdee.is_finite() && target.abs() < i64::MAX as f64) {
        warn!(bmr, tdee, "energy target out of range");
        return Err(PlannerError::Unavailable("biometrics"));
    }
    let recommended = target as i64;

    Ok(EnergyResult {
        bmr,
        tdee,
        daily_deficit: DAILY_DEFICIT,
        recommended_daily_calories: recommended,
    })
}
