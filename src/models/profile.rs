use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// Gender branch for the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    /// Anything other than male/female; BMR is zero for this case.
    Unspecified,
}

impl Gender {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

/// Self-reported activity level used for the TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    NotVeryActive,
    LightlyActive,
    ModeratelyActive,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Parse an activity token, ignoring case, `_`, `-` and spaces.
    pub fn parse(raw: &str) -> Option<Self> {
        let token: String = raw
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match token.as_str() {
            "notveryactive" => Some(ActivityLevel::NotVeryActive),
            "lightlyactive" => Some(ActivityLevel::LightlyActive),
            "moderatelyactive" => Some(ActivityLevel::ModeratelyActive),
            "active" => Some(ActivityLevel::Active),
            "veryactive" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::NotVeryActive => NOT_VERY_ACTIVE_MULT,
            ActivityLevel::LightlyActive => LIGHTLY_ACTIVE_MULT,
            ActivityLevel::ModeratelyActive => MODERATELY_ACTIVE_MULT,
            ActivityLevel::Active => ACTIVE_MULT,
            ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
        }
    }

    /// Token written back to profile files.
    pub fn token(self) -> &'static str {
        match self {
            ActivityLevel::NotVeryActive => "notVeryActive",
            ActivityLevel::LightlyActive => "lightlyActive",
            ActivityLevel::ModeratelyActive => "moderatelyActive",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "veryActive",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Accept numbers or numeric strings; anything else reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LenientNumber>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        LenientNumber::Number(n) => Some(n),
        LenientNumber::Text(s) => s.trim().parse().ok(),
        LenientNumber::Other(_) => None,
    }))
}

/// User profile as supplied by the surrounding application.
///
/// Fields stay raw so that a partially filled profile still loads; validation
/// happens in [`Profile::biometrics`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default, deserialize_with = "lenient_number", alias = "height_cm")]
    pub height: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", alias = "weight_kg")]
    pub weight: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", alias = "goal_weight")]
    pub goal_weight: Option<f64>,

    #[serde(default, alias = "activity_level")]
    pub activity_level: Option<String>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub age: Option<f64>,
}

/// Validated profile values ready for the energy model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal_weight_kg: f64,
    pub age: f64,
    /// `None` for a missing or unrecognized token.
    pub activity: Option<ActivityLevel>,
}

fn positive(value: Option<f64>, field: &'static str) -> Result<f64> {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(PlannerError::Unavailable(field))
}

impl Profile {
    /// Validate numeric fields; any missing or non-positive value is `Unavailable`.
    pub fn biometrics(&self) -> Result<Biometrics> {
        Ok(Biometrics {
            gender: self
                .gender
                .as_deref()
                .map(Gender::parse)
                .unwrap_or(Gender::Unspecified),
            height_cm: positive(self.height, "height")?,
            weight_kg: positive(self.weight, "weight")?,
            goal_weight_kg: positive(self.goal_weight, "goal weight")?,
            age: positive(self.age, "age")?,
            activity: self.activity_level.as_deref().and_then(ActivityLevel::parse),
        })
    }

    /// Current minus goal weight in kg. Informational only.
    pub fn weight_gap_kg(&self) -> Option<f64> {
        match (self.weight, self.goal_weight) {
            (Some(current), Some(goal)) if current.is_finite() && goal.is_finite() => {
                Some(current - goal)
            }
            _ => None,
        }
    }
}
