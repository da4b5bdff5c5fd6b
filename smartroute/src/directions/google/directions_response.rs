use crate::directions::RouteSourceError;
use itertools::{Either, Itertools};
use serde::{Deserialize, Serialize};
use smartroute_core::model::route::{CandidateRoute, InvalidRouteError, RouteLeg, RouteStep};
use smartroute_core::util::geo_ops;
use uom::si::f64::{Length, Time};
use uom::si::length::meter;
use uom::si::time::second;

/// response body of the Google Directions API. only the fields used for route
/// scoring are read.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DirectionsLeg {
    pub duration: TextValue,
    pub distance: TextValue,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub steps: Vec<DirectionsStep>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DirectionsStep {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub html_instructions: String,
    #[serde(default = "default_travel_mode")]
    pub travel_mode: String,
}

/// a quantity with its human-readable form, e.g. `{"text": "12.4 km", "value": 12400}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl DirectionsResponse {
    /// interprets the response status. `OK` yields the converted routes, `ZERO_RESULTS`
    /// and `NOT_FOUND` yield no routes, any other status is an upstream failure.
    ///
    /// alternatives that fail validation are skipped. it is an error only when every
    /// alternative is invalid.
    pub fn into_routes(self) -> Result<Vec<CandidateRoute>, RouteSourceError> {
        match self.status.as_str() {
            "OK" => {
                let count = self.routes.len();
                let (valid, invalid): (Vec<CandidateRoute>, Vec<(usize, InvalidRouteError)>) = self
                    .routes
                    .into_iter()
                    .enumerate()
                    .partition_map(|(index, route)| match CandidateRoute::try_from(route) {
                        Ok(route) => Either::Left(route),
                        Err(e) => Either::Right((index, e)),
                    });
                for (index, e) in invalid.iter() {
                    log::warn!("skipping route {index} of {count} from directions response: {e}");
                }
                match invalid.into_iter().next() {
                    Some((index, source)) if valid.is_empty() => {
                        Err(RouteSourceError::NoValidRoutes {
                            count,
                            index,
                            source,
                        })
                    }
                    _ => Ok(valid),
                }
            }
            "ZERO_RESULTS" | "NOT_FOUND" => {
                log::info!("directions request returned status {}", self.status);
                Ok(vec![])
            }
            _ => Err(RouteSourceError::Upstream {
                message: self
                    .error_message
                    .unwrap_or_else(|| String::from("no error message provided")),
                status: self.status,
            }),
        }
    }
}

impl TryFrom<DirectionsRoute> for CandidateRoute {
    type Error = InvalidRouteError;

    fn try_from(route: DirectionsRoute) -> Result<Self, Self::Error> {
        let legs = route
            .legs
            .into_iter()
            .map(RouteLeg::from)
            .collect::<Vec<_>>();
        CandidateRoute::new(&route.summary, legs)
    }
}

impl From<DirectionsLeg> for RouteLeg {
    fn from(leg: DirectionsLeg) -> Self {
        let steps = leg.steps.into_iter().map(RouteStep::from).collect();
        let mut route_leg = RouteLeg::new(
            &leg.start_address,
            &leg.end_address,
            leg.start_location.into(),
            leg.end_location.into(),
            Time::new::<second>(leg.duration.value),
            Length::new::<meter>(leg.distance.value),
            steps,
        );
        route_leg.duration_text = leg.duration.text;
        route_leg.distance_text = leg.distance.text;
        route_leg
    }
}

impl From<DirectionsStep> for RouteStep {
    fn from(step: DirectionsStep) -> Self {
        RouteStep {
            start_location: step.start_location.into(),
            end_location: step.end_location.into(),
            distance: Length::new::<meter>(step.distance.value),
            distance_text: step.distance.text,
            duration: Time::new::<second>(step.duration.value),
            duration_text: step.duration.text,
            instructions: step.html_instructions,
            travel_mode: step.travel_mode,
        }
    }
}

impl From<LatLng> for geo::Point<f64> {
    fn from(value: LatLng) -> Self {
        geo_ops::point_from_lat_lng(value.lat, value.lng)
    }
}

fn default_travel_mode() -> String {
    String::from("DRIVING")
}
