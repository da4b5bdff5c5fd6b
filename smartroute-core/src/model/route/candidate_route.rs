use super::{route_ops, InvalidRouteError, RouteLeg, RouteSegment, RouteStep};
use crate::util::geo_ops;
use geo::Point;
use uom::si::f64::{Length, Time};
use uom::ConstZero;

/// a single alternative returned by a route source: a summary plus one or more legs
/// travelled in order.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateRoute {
    pub summary: String,
    pub legs: Vec<RouteLeg>,
}

impl CandidateRoute {
    /// builds a route, rejecting it if it does not satisfy [`CandidateRoute::validate`].
    pub fn new(summary: &str, legs: Vec<RouteLeg>) -> Result<CandidateRoute, InvalidRouteError> {
        let route = CandidateRoute {
            summary: summary.to_string(),
            legs,
        };
        route.validate()?;
        Ok(route)
    }

    /// confirms the route has at least one leg, that every leg has a finite positive
    /// duration, that all distances are finite and non-negative and that all
    /// coordinates are valid latitude/longitude pairs.
    pub fn validate(&self) -> Result<(), InvalidRouteError> {
        if self.legs.is_empty() {
            return Err(InvalidRouteError::NoLegs);
        }
        for (leg_idx, leg) in self.legs.iter().enumerate() {
            let seconds = route_ops::seconds(&leg.duration);
            if !seconds.is_finite() || seconds <= 0.0 {
                return Err(InvalidRouteError::InvalidDuration {
                    leg: leg_idx,
                    seconds,
                });
            }
            check_distance(&leg.distance, || format!("leg {leg_idx}"))?;
            check_point(&leg.start_location, || format!("leg {leg_idx} start"))?;
            check_point(&leg.end_location, || format!("leg {leg_idx} end"))?;
            for (step_idx, step) in leg.steps.iter().enumerate() {
                check_distance(&step.distance, || format!("leg {leg_idx} step {step_idx}"))?;
                check_point(&step.start_location, || {
                    format!("leg {leg_idx} step {step_idx} start")
                })?;
            }
        }
        Ok(())
    }

    pub fn total_duration(&self) -> Time {
        self.legs.iter().fold(Time::ZERO, |acc, leg| acc + leg.duration)
    }

    pub fn total_distance(&self) -> Length {
        self.legs
            .iter()
            .fold(Length::ZERO, |acc, leg| acc + leg.distance)
    }

    /// all steps across all legs, in travel order
    pub fn steps(&self) -> impl Iterator<Item = &RouteStep> {
        self.legs.iter().flat_map(|leg| leg.steps.iter())
    }

    /// where the route begins: the start of the first step, or the first leg's
    /// start location when that leg has no steps.
    pub fn origin(&self) -> Option<Point<f64>> {
        self.steps()
            .next()
            .map(|s| s.start_location)
            .or_else(|| self.legs.first().map(|l| l.start_location))
    }

    pub fn destination(&self) -> Option<Point<f64>> {
        self.legs.last().map(|l| l.end_location)
    }

    pub fn start_address(&self) -> &str {
        self.legs
            .first()
            .map(|l| l.start_address.as_str())
            .unwrap_or_default()
    }

    pub fn end_address(&self) -> &str {
        self.legs
            .last()
            .map(|l| l.end_address.as_str())
            .unwrap_or_default()
    }

    /// the points at which traffic is sampled: the start of every step, weighted by the
    /// step distance, followed by the final destination as a zero-distance terminal.
    pub fn segments(&self) -> Vec<RouteSegment> {
        let mut segments: Vec<RouteSegment> = self
            .steps()
            .map(|step| RouteSegment {
                location: step.start_location,
                distance: step.distance,
            })
            .collect();
        if let Some(destination) = self.destination() {
            segments.push(RouteSegment {
                location: destination,
                distance: Length::ZERO,
            });
        }
        segments
    }
}

fn check_distance<F>(distance: &Length, context: F) -> Result<(), InvalidRouteError>
where
    F: Fn() -> String,
{
    let meters = route_ops::meters(distance);
    if !meters.is_finite() || meters < 0.0 {
        return Err(InvalidRouteError::InvalidDistance {
            context: context(),
            meters,
        });
    }
    Ok(())
}

fn check_point<F>(point: &Point<f64>, context: F) -> Result<(), InvalidRouteError>
where
    F: Fn() -> String,
{
    geo_ops::validate_point(point).map_err(|message| InvalidRouteError::InvalidCoordinate {
        context: context(),
        message,
    })
}
