/// One discrete load state of the system.
///
/// Probabilities across a set of levels are not required to sum to one;
/// each level is weighted independently by its own probability.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadLevel {
    pub magnitude_mw: f64,
    pub probability: f64,
}

impl LoadLevel {
    pub fn new(magnitude_mw: f64, probability: f64) -> Self {
        Self {
            magnitude_mw,
            probability,
        }
    }
}
