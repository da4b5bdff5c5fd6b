use crate::directions::RouteSourceError;
use smartroute_core::model::scoring::RouteScoringError;
use smartroute_core::model::traffic::TrafficSourceError;

#[derive(thiserror::Error, Debug)]
pub enum OptimizerError {
    #[error(transparent)]
    Scoring(#[from] RouteScoringError),
    #[error("error finding routes: {0}")]
    RouteSource(RouteSourceError),
}

impl OptimizerError {
    pub fn invalid_input(message: impl Into<String>) -> OptimizerError {
        OptimizerError::Scoring(RouteScoringError::InvalidInput(message.into()))
    }
}

/// a response whose alternatives all fail validation is treated as unusable input
/// rather than a failure of the route source itself.
impl From<RouteSourceError> for OptimizerError {
    fn from(value: RouteSourceError) -> Self {
        match value {
            e @ RouteSourceError::NoValidRoutes { .. } => {
                OptimizerError::invalid_input(e.to_string())
            }
            other => OptimizerError::RouteSource(other),
        }
    }
}

impl From<TrafficSourceError> for OptimizerError {
    fn from(value: TrafficSourceError) -> Self {
        OptimizerError::Scoring(RouteScoringError::TrafficSourceFailure(value))
    }
}
