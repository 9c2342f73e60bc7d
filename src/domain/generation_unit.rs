#[derive(Debug, Clone, PartialEq)]
pub struct GenerationUnit {
    pub name: String,
    /// Nameplate capacity. Informational only, the availability model
    /// decides the output of a unit.
    pub capacity_mw: f64,
    /// Forced outage rate in `[0, 1]`.
    pub unavailability: f64,
}

impl GenerationUnit {
    pub fn new(name: &str, capacity_mw: f64, unavailability: f64) -> Self {
        Self {
            name: name.to_string(),
            capacity_mw,
            unavailability,
        }
    }
}
