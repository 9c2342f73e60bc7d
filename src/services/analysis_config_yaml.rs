use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::analysis::{
    AnalysisConfig, AvailabilityMode, DEFAULT_PERIOD_HOURS, DEFAULT_TRIALS, NegativeLoadPolicy,
};
use crate::domain::generation_unit::GenerationUnit;
use crate::domain::load_level::LoadLevel;

#[derive(Error, Debug)]
pub enum AnalysisConfigYamlError {
    #[error("failed to read analysis config yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse analysis config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AnalysisRecord {
    trials: Option<usize>,
    period_hours: Option<f64>,
    seed: Option<u64>,
    availability_mode: Option<AvailabilityMode>,
    negative_load: Option<NegativeLoadPolicy>,
    load_levels: Vec<LoadLevelRecord>,
    generation_units: Vec<GenerationUnitRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LoadLevelRecord {
    magnitude: f64,
    probability: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GenerationUnitRecord {
    name: String,
    capacity: f64,
    unavailability: f64,
}

pub fn load_analysis_config_from_yaml_file(
    path: &str,
) -> Result<AnalysisConfig, AnalysisConfigYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_analysis_config_from_yaml_str(&contents)
}

/// Parses a scenario file. Value ranges are checked later, when the
/// analysis validates its configuration.
pub fn deserialize_analysis_config_from_yaml_str(
    input: &str,
) -> Result<AnalysisConfig, AnalysisConfigYamlError> {
    let record: AnalysisRecord = serde_yaml::from_str(input)?;

    Ok(AnalysisConfig {
        load_levels: record
            .load_levels
            .into_iter()
            .map(|level| LoadLevel::new(level.magnitude, level.probability))
            .collect(),
        generation_units: record
            .generation_units
            .into_iter()
            .map(|unit| GenerationUnit {
                name: unit.name,
                capacity_mw: unit.capacity,
                unavailability: unit.unavailability,
            })
            .collect(),
        trials: record.trials.unwrap_or(DEFAULT_TRIALS),
        period_hours: record.period_hours.unwrap_or(DEFAULT_PERIOD_HOURS),
        availability_mode: record.availability_mode.unwrap_or_default(),
        negative_load: record.negative_load.unwrap_or_default(),
        seed: record.seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
trials: 250
period_hours: 720
seed: 7
availability_mode: declared_unavailability
negative_load: clamp_at_zero
load_levels:
  - magnitude: 400
    probability: 0.7
  - magnitude: 550.5
    probability: 0.3
generation_units:
  - name: G1
    capacity: 200
    unavailability: 0.05
  - name: G2
    capacity: 150
    unavailability: 0.1
"#;
        let config = deserialize_analysis_config_from_yaml_str(yaml).unwrap();

        assert_eq!(config.trials, 250);
        assert_eq!(config.period_hours, 720.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.availability_mode, AvailabilityMode::DeclaredUnavailability);
        assert_eq!(config.negative_load, NegativeLoadPolicy::ClampAtZero);
        assert_eq!(
            config.load_levels,
            vec![LoadLevel::new(400.0, 0.7), LoadLevel::new(550.5, 0.3)]
        );
        assert_eq!(config.generation_units[1], GenerationUnit::new("G2", 150.0, 0.1));
    }

    #[test]
    fn applies_defaults_for_optional_fields() {
        let yaml = r#"
load_levels:
  - { magnitude: 100, probability: 1.0 }
generation_units:
  - { name: G1, capacity: 100, unavailability: 0.02 }
"#;
        let config = deserialize_analysis_config_from_yaml_str(yaml).unwrap();

        assert_eq!(config.trials, DEFAULT_TRIALS);
        assert_eq!(config.period_hours, DEFAULT_PERIOD_HOURS);
        assert_eq!(config.seed, None);
        assert_eq!(config.availability_mode, AvailabilityMode::FixedRange);
        assert_eq!(config.negative_load, NegativeLoadPolicy::Keep);
    }

    #[test]
    fn rejects_unknown_availability_mode() {
        let yaml = r#"
availability_mode: bernoulli
load_levels: []
generation_units: []
"#;
        assert!(matches!(
            deserialize_analysis_config_from_yaml_str(yaml),
            Err(AnalysisConfigYamlError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            load_analysis_config_from_yaml_file("/nonexistent/plole-config.yaml"),
            Err(AnalysisConfigYamlError::Read(_))
        ));
    }
}
