use thiserror::Error;

/// Built-in calibration table: availability fraction of a unit.
pub const REFERENCE_AVAILABILITIES: [f64; 5] = [0.80, 0.85, 0.90, 0.95, 1.00];
/// Built-in calibration table: expected unit output in MW.
pub const REFERENCE_OUTPUTS_MW: [f64; 5] = [80.0, 130.0, 195.0, 240.0, 300.0];

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("reference data length mismatch: {availabilities} availabilities, {outputs} outputs")]
    LengthMismatch { availabilities: usize, outputs: usize },
    #[error("at least two reference points are required, got {0}")]
    InsufficientPoints(usize),
    #[error("reference data contains a non-finite value")]
    NonFinite,
    #[error("reference availabilities have zero variance")]
    ZeroVariance,
}

/// Straight line from availability fraction to unit output, fitted by
/// ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationAvailabilityModel {
    pub slope: f64,
    pub intercept: f64,
}

impl GenerationAvailabilityModel {
    pub fn fit(
        reference_availabilities: &[f64],
        reference_outputs: &[f64],
    ) -> Result<Self, ModelError> {
        if reference_availabilities.len() != reference_outputs.len() {
            return Err(ModelError::LengthMismatch {
                availabilities: reference_availabilities.len(),
                outputs: reference_outputs.len(),
            });
        }
        let n = reference_availabilities.len();
        if n < 2 {
            return Err(ModelError::InsufficientPoints(n));
        }
        if reference_availabilities
            .iter()
            .chain(reference_outputs)
            .any(|value| !value.is_finite())
        {
            return Err(ModelError::NonFinite);
        }

        let mean_x = reference_availabilities.iter().sum::<f64>() / n as f64;
        let mean_y = reference_outputs.iter().sum::<f64>() / n as f64;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for (x, y) in reference_availabilities.iter().zip(reference_outputs) {
            let dx = x - mean_x;
            covariance += dx * (y - mean_y);
            variance += dx * dx;
        }
        if variance <= f64::EPSILON {
            return Err(ModelError::ZeroVariance);
        }

        let slope = covariance / variance;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Fits the built-in reference table.
    pub fn reference() -> Result<Self, ModelError> {
        Self::fit(&REFERENCE_AVAILABILITIES, &REFERENCE_OUTPUTS_MW)
    }

    pub fn predict_one(&self, availability: f64) -> f64 {
        (self.intercept + self.slope * availability).max(0.0)
    }

    pub fn predict(&self, availabilities: &[f64]) -> Vec<f64> {
        availabilities
            .iter()
            .map(|availability| self.predict_one(*availability))
            .collect()
    }
}
