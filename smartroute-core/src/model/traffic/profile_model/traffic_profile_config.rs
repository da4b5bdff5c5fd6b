use serde::{Deserialize, Serialize};

/// spatial resolution of a [`super::TrafficProfileModel`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrafficProfileConfig {
    /// edge length of the square grid cells observations are binned into, in degrees.
    #[serde(default = "default_cell_size_degrees")]
    pub cell_size_degrees: f64,
    /// a query further than this from every cell center (in degrees) uses the
    /// model-wide profile.
    #[serde(default = "default_max_cell_distance_degrees")]
    pub max_cell_distance_degrees: f64,
}

impl Default for TrafficProfileConfig {
    fn default() -> Self {
        Self {
            cell_size_degrees: default_cell_size_degrees(),
            max_cell_distance_degrees: default_max_cell_distance_degrees(),
        }
    }
}

impl TrafficProfileConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.cell_size_degrees.is_finite() || self.cell_size_degrees <= 0.0 {
            return Err(format!(
                "cell_size_degrees '{}' must be finite and positive",
                self.cell_size_degrees
            ));
        }
        if !self.max_cell_distance_degrees.is_finite() || self.max_cell_distance_degrees < 0.0 {
            return Err(format!(
                "max_cell_distance_degrees '{}' must be finite and non-negative",
                self.max_cell_distance_degrees
            ));
        }
        Ok(())
    }
}

fn default_cell_size_degrees() -> f64 {
    0.01
}

fn default_max_cell_distance_degrees() -> f64 {
    0.05
}
