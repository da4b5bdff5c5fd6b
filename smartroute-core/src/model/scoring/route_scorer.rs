use super::{RouteScoringError, ScoreComponents, ScoredRoute, ScoringPolicy};
use crate::model::route::CandidateRoute;
use crate::model::traffic::{TrafficFeatures, TrafficIntensitySource, TrafficSourceError};
use chrono::{DateTime, FixedOffset};
use geo::Point;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::sync::Arc;
use uom::si::length::{kilometer, meter};
use uom::si::time::hour;

/// ranks candidate routes by a composite cost of travel time, predicted traffic and
/// distance. lower scores are better.
///
/// scoring is a pure function of the route, the departure time and the responses of
/// the traffic source.
pub struct RouteScorer {
    traffic_source: Arc<dyn TrafficIntensitySource>,
    policy: ScoringPolicy,
}

impl RouteScorer {
    pub fn new(
        traffic_source: Arc<dyn TrafficIntensitySource>,
        policy: ScoringPolicy,
    ) -> Result<RouteScorer, RouteScoringError> {
        policy.validate().map_err(RouteScoringError::InvalidInput)?;
        Ok(RouteScorer {
            traffic_source,
            policy,
        })
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn traffic_source(&self) -> &Arc<dyn TrafficIntensitySource> {
        &self.traffic_source
    }

    /// computes the score of a single route departing at `departure_time`.
    pub fn score(
        &self,
        route: &CandidateRoute,
        departure_time: &DateTime<FixedOffset>,
    ) -> Result<f64, RouteScoringError> {
        self.score_components(route, departure_time)
            .map(|components| components.score)
    }

    /// computes the score of a route along with the normalized terms it was built from.
    pub fn score_components(
        &self,
        route: &CandidateRoute,
        departure_time: &DateTime<FixedOffset>,
    ) -> Result<ScoreComponents, RouteScoringError> {
        route.validate()?;
        let duration_hours = route.total_duration().get::<hour>();
        let distance_km = route.total_distance().get::<kilometer>();
        let components = match self.policy {
            ScoringPolicy::Blended {
                duration_weight,
                traffic_weight,
                distance_weight,
            } => {
                let traffic = self.traffic_component(route, departure_time)?;
                ScoreComponents {
                    duration_hours,
                    traffic,
                    distance_km,
                    score: duration_weight * duration_hours
                        + traffic_weight * traffic
                        + distance_weight * distance_km,
                }
            }
            ScoringPolicy::Multiplicative {
                duration_weight,
                distance_weight,
            } => {
                let origin = route.origin().ok_or(RouteScoringError::InvalidInput(
                    String::from("route has no origin"),
                ))?;
                let multiplier = self.intensity_at(&origin, departure_time)?;
                ScoreComponents {
                    duration_hours,
                    traffic: multiplier,
                    distance_km,
                    score: duration_weight * (duration_hours * multiplier)
                        + distance_weight * distance_km,
                }
            }
        };
        if !components.score.is_finite() {
            return Err(RouteScoringError::InvalidInput(format!(
                "route '{}' produced a non-finite score",
                route.summary
            )));
        }
        log::debug!(
            "route '{}' scored {:.4} (duration {:.3} h, traffic {:.3}, distance {:.3} km)",
            route.summary,
            components.score,
            components.duration_hours,
            components.traffic,
            components.distance_km
        );
        Ok(components)
    }

    /// scores every route, returning results in input order. routes are scored in
    /// parallel. the first failure is returned if any route cannot be scored.
    pub fn score_all(
        &self,
        routes: Vec<CandidateRoute>,
        departure_time: &DateTime<FixedOffset>,
    ) -> Result<Vec<ScoredRoute>, RouteScoringError> {
        routes
            .into_par_iter()
            .map(|route| {
                let components = self.score_components(&route, departure_time)?;
                Ok(ScoredRoute { route, components })
            })
            .collect()
    }

    /// scores all routes and returns the one with the lowest score. when several routes
    /// share the lowest score, the earliest in input order is returned.
    pub fn select_best(
        &self,
        routes: Vec<CandidateRoute>,
        departure_time: &DateTime<FixedOffset>,
    ) -> Result<ScoredRoute, RouteScoringError> {
        if routes.is_empty() {
            return Err(RouteScoringError::NoRoutesFound);
        }
        let mut scored = self.score_all(routes, departure_time)?;
        let best_idx = scored
            .iter()
            .position_min_by_key(|s| OrderedFloat(s.score()))
            .ok_or(RouteScoringError::NoRoutesFound)?;
        Ok(scored.swap_remove(best_idx))
    }

    /// distance-weighted mean intensity over the route's traffic sampling points,
    /// normalized by total route distance. zero when the route has no distance.
    fn traffic_component(
        &self,
        route: &CandidateRoute,
        departure_time: &DateTime<FixedOffset>,
    ) -> Result<f64, RouteScoringError> {
        let mut weighted_intensity = 0.0;
        for segment in route.segments() {
            let intensity = self.intensity_at(&segment.location, departure_time)?;
            weighted_intensity += intensity * segment.distance.get::<meter>();
        }
        let total_meters = route.total_distance().get::<meter>();
        if total_meters > 0.0 {
            Ok(weighted_intensity / total_meters)
        } else {
            Ok(0.0)
        }
    }

    fn intensity_at(
        &self,
        location: &Point<f64>,
        departure_time: &DateTime<FixedOffset>,
    ) -> Result<f64, RouteScoringError> {
        let features = TrafficFeatures::at(departure_time, location);
        let intensity = self.traffic_source.predict(&features)?;
        if !intensity.is_finite() {
            return Err(RouteScoringError::TrafficSourceFailure(
                TrafficSourceError::Prediction {
                    source_name: self.traffic_source.name(),
                    message: format!("non-finite intensity '{intensity}' for {features:?}"),
                },
            ));
        }
        Ok(intensity)
    }
}
