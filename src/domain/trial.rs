use serde::Serialize;

/// Generation side of one Monte Carlo draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub generation_total_mw: f64,
    /// Product of the sampled availability fractions of all units.
    pub joint_availability_probability: f64,
}

/// Demand not served for one (trial, load level) pair.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DeficitRecord {
    /// 1-based trial number.
    pub trial: usize,
    pub load_level_mw: f64,
    pub deficit_mw: f64,
}
