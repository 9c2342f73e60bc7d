use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::AnalysisConfig;
use crate::services::analysis_config_yaml::{AnalysisConfigYamlError, load_analysis_config_from_yaml_file};
use crate::services::analysis_types::{AnalysisOutput, DeficitPercentiles, ReliabilityReport};
use crate::services::availability_model::{GenerationAvailabilityModel, ModelError};
use crate::services::percentiles::percentiles_f64;
use crate::services::reliability_aggregator::{AggregationError, aggregate};
use crate::services::scenario_sampler::{
    RandomScenarioSource, SamplingError, ScenarioSampler, ScenarioSource,
};

/// Upper bound on (trial, load level) pairs in one run.
pub const MAX_SAMPLE_PAIRS: usize = 100_000_000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("at least one load level is required")]
    NoLoadLevels,
    #[error("at least one generation unit is required")]
    NoGenerationUnits,
    #[error("trials must be greater than zero")]
    InvalidTrials,
    #[error("{trials} trials over {load_levels} load levels exceed the limit of {max} samples")]
    TooManyTrials {
        trials: usize,
        load_levels: usize,
        max: usize,
    },
    #[error("period length must be positive and finite, got {0}")]
    InvalidPeriod(f64),
    #[error("load level {index} has invalid magnitude {magnitude} MW")]
    InvalidLoadMagnitude { index: usize, magnitude: f64 },
    #[error("load level {index} has probability {probability} outside [0, 1]")]
    InvalidLoadProbability { index: usize, probability: f64 },
    #[error("generation unit {index} has an empty name")]
    EmptyUnitName { index: usize },
    #[error("duplicate generation unit name: {0}")]
    DuplicateUnitName(String),
    #[error("generation unit {name} has invalid capacity {capacity} MW")]
    InvalidCapacity { name: String, capacity: f64 },
    #[error("generation unit {name} has unavailability {unavailability} outside [0, 1]")]
    InvalidUnavailability { name: String, unavailability: f64 },
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("failed to load analysis config: {0}")]
    ConfigFile(#[from] AnalysisConfigYamlError),
    #[error("availability model is degenerate: {0}")]
    NumericDegeneracy(#[from] ModelError),
    #[error("failed to sample scenarios: {0}")]
    Sampling(#[from] SamplingError),
    #[error("failed to aggregate deficits: {0}")]
    Aggregation(#[from] AggregationError),
}

/// Overrides applied on top of a config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOverrides {
    pub trials: Option<usize>,
    pub period_hours: Option<f64>,
    pub seed: Option<u64>,
}

pub fn analyze_from_yaml_file(
    config_path: &str,
    overrides: AnalysisOverrides,
) -> Result<AnalysisOutput, AnalysisError> {
    let mut config = load_analysis_config_from_yaml_file(config_path)?;
    if let Some(trials) = overrides.trials {
        config.trials = trials;
    }
    if let Some(period_hours) = overrides.period_hours {
        config.period_hours = period_hours;
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }

    let mut output = run_analysis(&config)?;
    output.report.data_source = data_source_name(config_path);
    Ok(output)
}

/// Runs one analysis with a generator seeded from `config.seed`, or from
/// OS entropy when no seed is set.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisOutput, AnalysisError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut source = RandomScenarioSource::new(rng, config.availability_mode);
    run_analysis_with_source(config, &mut source)
}

pub fn run_analysis_with_source<S: ScenarioSource + ?Sized>(
    config: &AnalysisConfig,
    source: &mut S,
) -> Result<AnalysisOutput, AnalysisError> {
    validate_config(config)?;
    info!(
        load_levels = config.load_levels.len(),
        units = config.generation_units.len(),
        trials = config.trials,
        period_hours = config.period_hours,
        "starting reliability analysis"
    );

    let model = GenerationAvailabilityModel::reference()?;
    debug!(slope = model.slope, intercept = model.intercept, "fitted availability model");

    let sampler = ScenarioSampler::new(model, config.negative_load);
    let scenarios = sampler.sample(
        source,
        &config.load_levels,
        &config.generation_units,
        config.trials,
    )?;
    let aggregation = aggregate(
        &scenarios.load_samples,
        &scenarios.trials,
        &config.load_levels,
        config.period_hours,
    )?;

    let deficits: Vec<f64> = aggregation.records.iter().map(|r| r.deficit_mw).collect();
    let shortfalls: Vec<f64> = deficits.iter().copied().filter(|d| *d > 0.0).collect();
    let mean_shortfall_mw = if shortfalls.is_empty() {
        0.0
    } else {
        shortfalls.iter().sum::<f64>() / shortfalls.len() as f64
    };
    let percentiles = percentiles_f64(&deficits, &[50.0, 85.0, 100.0]);
    let min_generation_mw = scenarios
        .trials
        .iter()
        .map(|t| t.generation_total_mw)
        .fold(f64::INFINITY, f64::min);

    let report = ReliabilityReport {
        data_source: String::new(),
        trials: config.trials,
        load_levels: config.load_levels.len(),
        generation_units: config.generation_units.len(),
        period_hours: config.period_hours,
        availability_mode: config.availability_mode,
        negative_load: config.negative_load,
        seed: config.seed,
        plole: aggregation.indices.plole(),
        ploee: aggregation.indices.ploee(),
        loss_of_load_samples: shortfalls.len(),
        mean_shortfall_mw,
        deficit_percentiles: DeficitPercentiles {
            p50: percentiles[0],
            p85: percentiles[1],
            p100: percentiles[2],
        },
        min_generation_mw,
    };
    info!(
        plole = report.plole,
        ploee = report.ploee,
        loss_of_load_samples = report.loss_of_load_samples,
        "reliability analysis finished"
    );

    Ok(AnalysisOutput {
        report,
        deficits: aggregation.records,
        indices: aggregation.indices,
    })
}

/// Rejects configurations that cannot produce meaningful indices, before
/// any sampling happens.
pub fn validate_config(config: &AnalysisConfig) -> Result<(), ConfigurationError> {
    if config.load_levels.is_empty() {
        return Err(ConfigurationError::NoLoadLevels);
    }
    if config.generation_units.is_empty() {
        return Err(ConfigurationError::NoGenerationUnits);
    }
    if config.trials == 0 {
        return Err(ConfigurationError::InvalidTrials);
    }
    match config.trials.checked_mul(config.load_levels.len()) {
        Some(pairs) if pairs <= MAX_SAMPLE_PAIRS => {}
        _ => {
            return Err(ConfigurationError::TooManyTrials {
                trials: config.trials,
                load_levels: config.load_levels.len(),
                max: MAX_SAMPLE_PAIRS,
            });
        }
    }
    if !(config.period_hours.is_finite() && config.period_hours > 0.0) {
        return Err(ConfigurationError::InvalidPeriod(config.period_hours));
    }

    for (index, level) in config.load_levels.iter().enumerate() {
        if !(level.magnitude_mw.is_finite() && level.magnitude_mw > 0.0) {
            return Err(ConfigurationError::InvalidLoadMagnitude {
                index,
                magnitude: level.magnitude_mw,
            });
        }
        if !(0.0..=1.0).contains(&level.probability) {
            return Err(ConfigurationError::InvalidLoadProbability {
                index,
                probability: level.probability,
            });
        }
    }

    let mut names = HashSet::new();
    for (index, unit) in config.generation_units.iter().enumerate() {
        if unit.name.trim().is_empty() {
            return Err(ConfigurationError::EmptyUnitName { index });
        }
        if !names.insert(unit.name.as_str()) {
            return Err(ConfigurationError::DuplicateUnitName(unit.name.clone()));
        }
        if !(unit.capacity_mw.is_finite() && unit.capacity_mw > 0.0) {
            return Err(ConfigurationError::InvalidCapacity {
                name: unit.name.clone(),
                capacity: unit.capacity_mw,
            });
        }
        if !(0.0..=1.0).contains(&unit.unavailability) {
            return Err(ConfigurationError::InvalidUnavailability {
                name: unit.name.clone(),
                unavailability: unit.unavailability,
            });
        }
    }

    Ok(())
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
