//! Monte Carlo generation-adequacy analysis: loss-of-load expectation
//! (PLOLE) and expected unserved energy (PLOEE).

pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use domain::analysis::{AnalysisConfig, AvailabilityMode, NegativeLoadPolicy};
pub use services::analysis_types::{AnalysisOutput, ReliabilityReport};
pub use services::reliability_analysis::{
    AnalysisError, ConfigurationError, run_analysis, run_analysis_with_source,
};
