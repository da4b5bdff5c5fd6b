use super::route_ops;
use geo::Point;
use uom::si::f64::{Length, Time};

/// a sub-segment of a leg with its own start coordinate, distance and duration.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStep {
    pub start_location: Point<f64>,
    pub end_location: Point<f64>,
    pub distance: Length,
    pub distance_text: String,
    pub duration: Time,
    pub duration_text: String,
    /// html-formatted instructions as delivered by the route source
    pub instructions: String,
    pub travel_mode: String,
}

impl RouteStep {
    /// builds a driving step with generated text descriptions and no instructions.
    pub fn new(
        start_location: Point<f64>,
        end_location: Point<f64>,
        distance: Length,
        duration: Time,
    ) -> RouteStep {
        RouteStep {
            start_location,
            end_location,
            distance,
            distance_text: route_ops::format_length(&distance),
            duration,
            duration_text: route_ops::format_time(&duration),
            instructions: String::new(),
            travel_mode: String::from("DRIVING"),
        }
    }

    pub fn with_instructions(mut self, instructions: &str) -> RouteStep {
        self.instructions = instructions.to_string();
        self
    }
}
