use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use smartroute_core::model::route::{route_ops, RouteStep};
use smartroute_core::model::scoring::{ScoreComponents, ScoredRoute};

/// the response document describing the selected route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OptimalRoute {
    pub summary: String,
    pub duration: TextValue,
    pub distance: TextValue,
    pub start_address: String,
    pub end_address: String,
    pub steps: Vec<StepSummary>,
    /// the score of the selected route, lower is better
    pub traffic_score: f64,
    pub score_components: ScoreComponents,
    pub scoring_policy: String,
    pub departure_time: String,
    pub alternatives_considered: usize,
}

/// a quantity with its human-readable form. durations are in seconds, distances in meters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextValue {
    pub text: String,
    pub value: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StepSummary {
    pub distance: String,
    pub duration: String,
    pub instructions: String,
    pub travel_mode: String,
}

impl OptimalRoute {
    pub fn new(
        best: ScoredRoute,
        departure_time: &DateTime<FixedOffset>,
        scoring_policy: &str,
        alternatives_considered: usize,
    ) -> OptimalRoute {
        let route = &best.route;
        let total_duration = route.total_duration();
        let total_distance = route.total_distance();
        // single-leg routes keep the texts reported by the route source
        let (duration_text, distance_text) = match route.legs.as_slice() {
            [leg] => (leg.duration_text.clone(), leg.distance_text.clone()),
            _ => (
                route_ops::format_time(&total_duration),
                route_ops::format_length(&total_distance),
            ),
        };
        OptimalRoute {
            summary: route.summary.clone(),
            duration: TextValue {
                text: duration_text,
                value: route_ops::seconds(&total_duration).round() as i64,
            },
            distance: TextValue {
                text: distance_text,
                value: route_ops::meters(&total_distance).round() as i64,
            },
            start_address: route.start_address().to_string(),
            end_address: route.end_address().to_string(),
            steps: route.steps().map(StepSummary::from).collect(),
            traffic_score: best.score(),
            score_components: best.components,
            scoring_policy: scoring_policy.to_string(),
            departure_time: departure_time.to_rfc3339_opts(SecondsFormat::Secs, false),
            alternatives_considered,
        }
    }
}

impl From<&RouteStep> for StepSummary {
    fn from(step: &RouteStep) -> Self {
        StepSummary {
            distance: step.distance_text.clone(),
            duration: step.duration_text.clone(),
            instructions: step.instructions.clone(),
            travel_mode: step.travel_mode.clone(),
        }
    }
}
