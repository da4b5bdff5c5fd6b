use serde::{Deserialize, Serialize};

/// the normalized terms of a route score and the weighted total.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScoreComponents {
    /// travel duration in hours
    pub duration_hours: f64,
    /// for blended scoring, the distance-weighted mean traffic intensity. for
    /// multiplicative scoring, the traffic multiplier applied to the duration.
    pub traffic: f64,
    /// travel distance in kilometers
    pub distance_km: f64,
    /// weighted total, lower is better
    pub score: f64,
}
