use serde::Serialize;

use crate::domain::analysis::{AvailabilityMode, NegativeLoadPolicy};
use crate::domain::trial::DeficitRecord;
use crate::services::reliability_aggregator::ReliabilityIndices;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DeficitPercentiles {
    pub p50: f64,
    pub p85: f64,
    pub p100: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReliabilityReport {
    pub data_source: String,
    pub trials: usize,
    pub load_levels: usize,
    pub generation_units: usize,
    pub period_hours: f64,
    pub availability_mode: AvailabilityMode,
    pub negative_load: NegativeLoadPolicy,
    pub seed: Option<u64>,
    /// Hours of loss of load per period.
    pub plole: f64,
    /// MWh of unserved energy per period.
    pub ploee: f64,
    pub loss_of_load_samples: usize,
    /// Mean deficit over the samples that had one.
    pub mean_shortfall_mw: f64,
    pub deficit_percentiles: DeficitPercentiles,
    pub min_generation_mw: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct AnalysisOutput {
    pub report: ReliabilityReport,
    pub deficits: Vec<DeficitRecord>,
    pub indices: ReliabilityIndices,
}
