use serde::{Deserialize, Serialize};

use crate::domain::generation_unit::GenerationUnit;
use crate::domain::load_level::LoadLevel;

pub const DEFAULT_TRIALS: usize = 1000;
pub const DEFAULT_PERIOD_HOURS: f64 = 8760.0;

/// How each unit's availability fraction is drawn per trial.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityMode {
    /// Uniform in `[0.8, 1.0]` for every unit, ignoring declared unavailability.
    #[default]
    FixedRange,
    /// Beta draw centred on `1 - unavailability` of the unit.
    DeclaredUnavailability,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegativeLoadPolicy {
    #[default]
    Keep,
    ClampAtZero,
}

/// Immutable input of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub load_levels: Vec<LoadLevel>,
    pub generation_units: Vec<GenerationUnit>,
    pub trials: usize,
    pub period_hours: f64,
    pub availability_mode: AvailabilityMode,
    pub negative_load: NegativeLoadPolicy,
    pub seed: Option<u64>,
}

impl AnalysisConfig {
    pub fn new(load_levels: Vec<LoadLevel>, generation_units: Vec<GenerationUnit>) -> Self {
        Self {
            load_levels,
            generation_units,
            trials: DEFAULT_TRIALS,
            period_hours: DEFAULT_PERIOD_HOURS,
            availability_mode: AvailabilityMode::default(),
            negative_load: NegativeLoadPolicy::default(),
            seed: None,
        }
    }
}
