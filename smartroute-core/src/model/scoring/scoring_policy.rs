use serde::{Deserialize, Serialize};

/// how the duration, traffic and distance terms of a route are combined into a score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ScoringPolicy {
    /// weighted sum of duration (hours), traffic (distance-weighted mean intensity over
    /// every step) and distance (km).
    Blended {
        #[serde(default = "default_blended_duration_weight")]
        duration_weight: f64,
        #[serde(default = "default_blended_traffic_weight")]
        traffic_weight: f64,
        #[serde(default = "default_blended_distance_weight")]
        distance_weight: f64,
    },
    /// weighted sum of duration scaled by the traffic intensity at the route origin
    /// (hours) and distance (km).
    Multiplicative {
        #[serde(default = "default_multiplicative_duration_weight")]
        duration_weight: f64,
        #[serde(default = "default_multiplicative_distance_weight")]
        distance_weight: f64,
    },
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy::blended()
    }
}

impl ScoringPolicy {
    /// duration 0.4, traffic 0.4, distance 0.2
    pub fn blended() -> ScoringPolicy {
        ScoringPolicy::Blended {
            duration_weight: default_blended_duration_weight(),
            traffic_weight: default_blended_traffic_weight(),
            distance_weight: default_blended_distance_weight(),
        }
    }

    /// duration × traffic multiplier 0.6, distance 0.4
    pub fn multiplicative() -> ScoringPolicy {
        ScoringPolicy::Multiplicative {
            duration_weight: default_multiplicative_duration_weight(),
            distance_weight: default_multiplicative_distance_weight(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScoringPolicy::Blended { .. } => "blended",
            ScoringPolicy::Multiplicative { .. } => "multiplicative",
        }
    }

    /// weights must be finite and non-negative
    pub fn validate(&self) -> Result<(), String> {
        let weights = match self {
            ScoringPolicy::Blended {
                duration_weight,
                traffic_weight,
                distance_weight,
            } => vec![
                ("duration_weight", *duration_weight),
                ("traffic_weight", *traffic_weight),
                ("distance_weight", *distance_weight),
            ],
            ScoringPolicy::Multiplicative {
                duration_weight,
                distance_weight,
            } => vec![
                ("duration_weight", *duration_weight),
                ("distance_weight", *distance_weight),
            ],
        };
        for (key, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!(
                    "{} scoring {key} '{weight}' must be finite and non-negative",
                    self.name()
                ));
            }
        }
        Ok(())
    }
}

fn default_blended_duration_weight() -> f64 {
    0.4
}

fn default_blended_traffic_weight() -> f64 {
    0.4
}

fn default_blended_distance_weight() -> f64 {
    0.2
}

fn default_multiplicative_duration_weight() -> f64 {
    0.6
}

fn default_multiplicative_distance_weight() -> f64 {
    0.4
}
