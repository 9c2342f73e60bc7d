use serde::Serialize;
use thiserror::Error;

use crate::domain::load_level::LoadLevel;
use crate::domain::trial::{DeficitRecord, Trial};

#[derive(Error, Debug, PartialEq)]
pub enum AggregationError {
    #[error("expected load samples for {expected} load levels, got {actual}")]
    LoadLevelCount { expected: usize, actual: usize },
    #[error("load level {level} has {actual} samples, expected {expected}")]
    SampleCount {
        level: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{trials} trials over {load_levels} load levels overflow the record count")]
    PairCountOverflow { trials: usize, load_levels: usize },
}

/// Per-pair contributions to the two indices, in record order.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ReliabilityIndices {
    pub plole_contributions: Vec<f64>,
    pub ploee_contributions: Vec<f64>,
}

impl ReliabilityIndices {
    /// Loss-of-load expectation in hours per period.
    pub fn plole(&self) -> f64 {
        self.plole_contributions.iter().sum()
    }

    /// Expected unserved energy in MWh per period.
    pub fn ploee(&self) -> f64 {
        self.ploee_contributions.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub records: Vec<DeficitRecord>,
    pub indices: ReliabilityIndices,
}

/// Walks every (trial, load level) pair, trial-major, and weights each
/// deficit by the level probability, the trial's joint availability
/// probability and the period length.
pub fn aggregate(
    load_samples: &[Vec<f64>],
    trials: &[Trial],
    load_levels: &[LoadLevel],
    period_hours: f64,
) -> Result<Aggregation, AggregationError> {
    if load_samples.len() != load_levels.len() {
        return Err(AggregationError::LoadLevelCount {
            expected: load_levels.len(),
            actual: load_samples.len(),
        });
    }
    if let Some((level, samples)) = load_samples
        .iter()
        .enumerate()
        .find(|(_, samples)| samples.len() != trials.len())
    {
        return Err(AggregationError::SampleCount {
            level,
            expected: trials.len(),
            actual: samples.len(),
        });
    }

    let pairs = trials.len().checked_mul(load_levels.len()).ok_or(
        AggregationError::PairCountOverflow {
            trials: trials.len(),
            load_levels: load_levels.len(),
        },
    )?;
    let mut records = Vec::with_capacity(pairs);
    let mut indices = ReliabilityIndices {
        plole_contributions: Vec::with_capacity(pairs),
        ploee_contributions: Vec::with_capacity(pairs),
    };

    for (k, trial) in trials.iter().enumerate() {
        for (level, samples) in load_levels.iter().zip(load_samples) {
            let deficit = (samples[k] - trial.generation_total_mw).max(0.0);
            let loss = if deficit > 0.0 { 1.0 } else { 0.0 };
            let weight = level.probability * trial.joint_availability_probability;

            indices.plole_contributions.push(weight * loss * period_hours);
            indices.ploee_contributions.push(weight * deficit * period_hours);
            records.push(DeficitRecord {
                trial: k + 1,
                load_level_mw: level.magnitude_mw,
                deficit_mw: deficit,
            });
        }
    }

    Ok(Aggregation { records, indices })
}
