use rand::Rng;
use rand_distr::{Beta, Distribution, Normal};
use thiserror::Error;
use tracing::debug;

use crate::domain::analysis::{AvailabilityMode, NegativeLoadPolicy};
use crate::domain::generation_unit::GenerationUnit;
use crate::domain::load_level::LoadLevel;
use crate::domain::trial::Trial;
use crate::services::availability_model::GenerationAvailabilityModel;

/// Standard deviation of a load draw relative to the level magnitude.
pub const LOAD_RELATIVE_STD_DEV: f64 = 0.1;
pub const FIXED_RANGE_MIN_AVAILABILITY: f64 = 0.8;
pub const FIXED_RANGE_MAX_AVAILABILITY: f64 = 1.0;
/// Sum of the Beta shape parameters in declared-unavailability mode.
pub const AVAILABILITY_CONCENTRATION: f64 = 50.0;

#[derive(Error, Debug, PartialEq)]
pub enum SamplingError {
    #[error("invalid load distribution for magnitude {0} MW")]
    InvalidLoadDistribution(f64),
    #[error("invalid availability distribution for unit {unit} (unavailability {unavailability})")]
    InvalidAvailabilityDistribution { unit: String, unavailability: f64 },
}

/// Source of the random quantities a trial is built from.
pub trait ScenarioSource {
    fn sample_load(&mut self, magnitude_mw: f64) -> Result<f64, SamplingError>;
    fn sample_availability(&mut self, unit: &GenerationUnit) -> Result<f64, SamplingError>;
}

pub struct RandomScenarioSource<R: Rng> {
    rng: R,
    mode: AvailabilityMode,
}

impl<R: Rng> RandomScenarioSource<R> {
    pub fn new(rng: R, mode: AvailabilityMode) -> Self {
        Self { rng, mode }
    }
}

impl<R: Rng> ScenarioSource for RandomScenarioSource<R> {
    fn sample_load(&mut self, magnitude_mw: f64) -> Result<f64, SamplingError> {
        let normal = Normal::new(magnitude_mw, LOAD_RELATIVE_STD_DEV * magnitude_mw)
            .map_err(|_| SamplingError::InvalidLoadDistribution(magnitude_mw))?;
        Ok(normal.sample(&mut self.rng))
    }

    fn sample_availability(&mut self, unit: &GenerationUnit) -> Result<f64, SamplingError> {
        match self.mode {
            AvailabilityMode::FixedRange => Ok(self
                .rng
                .gen_range(FIXED_RANGE_MIN_AVAILABILITY..=FIXED_RANGE_MAX_AVAILABILITY)),
            AvailabilityMode::DeclaredUnavailability => {
                let unavailability = unit.unavailability;
                if unavailability <= 0.0 {
                    return Ok(1.0);
                }
                if unavailability >= 1.0 {
                    return Ok(0.0);
                }
                let beta = Beta::new(
                    AVAILABILITY_CONCENTRATION * (1.0 - unavailability),
                    AVAILABILITY_CONCENTRATION * unavailability,
                )
                .map_err(|_| SamplingError::InvalidAvailabilityDistribution {
                    unit: unit.name.clone(),
                    unavailability,
                })?;
                Ok(beta.sample(&mut self.rng))
            }
        }
    }
}

/// Load draws indexed `[level][trial]` plus the generation side of every trial.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledScenarios {
    pub load_samples: Vec<Vec<f64>>,
    pub trials: Vec<Trial>,
}

pub struct ScenarioSampler {
    model: GenerationAvailabilityModel,
    negative_load: NegativeLoadPolicy,
}

impl ScenarioSampler {
    pub fn new(model: GenerationAvailabilityModel, negative_load: NegativeLoadPolicy) -> Self {
        Self {
            model,
            negative_load,
        }
    }

    /// Draws every load sample first (level-major), then the availability
    /// vector of each trial in order.
    pub fn sample<S: ScenarioSource + ?Sized>(
        &self,
        source: &mut S,
        load_levels: &[LoadLevel],
        units: &[GenerationUnit],
        num_trials: usize,
    ) -> Result<SampledScenarios, SamplingError> {
        let mut load_samples = Vec::with_capacity(load_levels.len());
        for level in load_levels {
            let mut samples = Vec::with_capacity(num_trials);
            for _ in 0..num_trials {
                let load = source.sample_load(level.magnitude_mw)?;
                samples.push(self.apply_negative_load_policy(load));
            }
            load_samples.push(samples);
        }

        let mut trials = Vec::with_capacity(num_trials);
        let mut availabilities = Vec::with_capacity(units.len());
        for _ in 0..num_trials {
            availabilities.clear();
            for unit in units {
                availabilities.push(source.sample_availability(unit)?);
            }
            trials.push(Trial {
                generation_total_mw: self.model.predict(&availabilities).iter().sum(),
                joint_availability_probability: availabilities.iter().product(),
            });
        }

        debug!(
            load_levels = load_levels.len(),
            units = units.len(),
            trials = num_trials,
            "sampled scenarios"
        );
        Ok(SampledScenarios {
            load_samples,
            trials,
        })
    }

    fn apply_negative_load_policy(&self, load: f64) -> f64 {
        match self.negative_load {
            NegativeLoadPolicy::Keep => load,
            NegativeLoadPolicy::ClampAtZero => load.max(0.0),
        }
    }
}
