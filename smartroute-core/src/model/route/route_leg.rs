use super::{route_ops, RouteStep};
use geo::Point;
use uom::si::f64::{Length, Time};

/// the full travel path between an origin and a destination, composed of steps.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLeg {
    pub duration: Time,
    pub duration_text: String,
    pub distance: Length,
    pub distance_text: String,
    pub start_address: String,
    pub end_address: String,
    pub start_location: Point<f64>,
    pub end_location: Point<f64>,
    pub steps: Vec<RouteStep>,
}

impl RouteLeg {
    /// builds a leg whose totals and endpoints are provided explicitly. totals reported
    /// by a route source are not required to equal the sum of the step values.
    pub fn new(
        start_address: &str,
        end_address: &str,
        start_location: Point<f64>,
        end_location: Point<f64>,
        duration: Time,
        distance: Length,
        steps: Vec<RouteStep>,
    ) -> RouteLeg {
        RouteLeg {
            duration,
            duration_text: route_ops::format_time(&duration),
            distance,
            distance_text: route_ops::format_length(&distance),
            start_address: start_address.to_string(),
            end_address: end_address.to_string(),
            start_location,
            end_location,
            steps,
        }
    }
}
