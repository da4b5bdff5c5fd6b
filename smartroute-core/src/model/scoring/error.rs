use crate::model::route::InvalidRouteError;
use crate::model::traffic::TrafficSourceError;

#[derive(thiserror::Error, Debug)]
pub enum RouteScoringError {
    #[error("no routes found")]
    NoRoutesFound,
    #[error("traffic source failed: {0}")]
    TrafficSourceFailure(#[from] TrafficSourceError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<InvalidRouteError> for RouteScoringError {
    fn from(value: InvalidRouteError) -> Self {
        RouteScoringError::InvalidInput(value.to_string())
    }
}
