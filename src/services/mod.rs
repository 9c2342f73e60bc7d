pub mod analysis_config_yaml;
pub mod analysis_types;
pub mod availability_model;
pub mod percentiles;
pub mod reliability_aggregator;
pub mod reliability_analysis;
pub mod scenario_sampler;
