use crate::domain::analysis::AnalysisConfig;
use crate::domain::generation_unit::GenerationUnit;
use crate::domain::load_level::LoadLevel;
use crate::services::scenario_sampler::{SamplingError, ScenarioSource};

// A ScenarioSource that always returns the same load and availability
pub struct FixedScenarioSource {
    load_mw: f64,
    availability: f64,
    loads_drawn: usize,
}

impl FixedScenarioSource {
    pub fn new(load_mw: f64, availability: f64) -> Self {
        Self {
            load_mw,
            availability,
            loads_drawn: 0,
        }
    }

    pub fn loads_drawn(&self) -> usize {
        self.loads_drawn
    }
}

impl ScenarioSource for FixedScenarioSource {
    fn sample_load(&mut self, _magnitude_mw: f64) -> Result<f64, SamplingError> {
        self.loads_drawn += 1;
        Ok(self.load_mw)
    }

    fn sample_availability(&mut self, _unit: &GenerationUnit) -> Result<f64, SamplingError> {
        Ok(self.availability)
    }
}

pub fn three_units() -> Vec<GenerationUnit> {
    vec![
        GenerationUnit::new("G1", 300.0, 0.05),
        GenerationUnit::new("G2", 300.0, 0.08),
        GenerationUnit::new("G3", 250.0, 0.1),
    ]
}

/// One level, one unit, one trial, unit period.
pub fn single_unit_config(magnitude_mw: f64) -> AnalysisConfig {
    let mut config = AnalysisConfig::new(
        vec![LoadLevel::new(magnitude_mw, 1.0)],
        vec![GenerationUnit::new("G1", 300.0, 0.05)],
    );
    config.trials = 1;
    config.period_hours = 1.0;
    config
}

/// Three units against loads that regularly exceed their combined output.
pub fn sample_config(seed: Option<u64>) -> AnalysisConfig {
    let mut config = AnalysisConfig::new(
        vec![
            LoadLevel::new(600.0, 0.4),
            LoadLevel::new(800.0, 0.4),
            LoadLevel::new(900.0, 0.2),
        ],
        three_units(),
    );
    config.trials = 400;
    config.seed = seed;
    config
}
