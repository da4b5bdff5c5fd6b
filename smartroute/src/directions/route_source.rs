use super::{RouteQuery, RouteSourceError};
use smartroute_core::model::route::CandidateRoute;

/// a provider of alternative routes between two places, such as a mapping API.
///
/// an empty result means no route was found. implementations are shared across
/// requests and must be safe to call concurrently.
pub trait RouteSource: Send + Sync {
    fn name(&self) -> String;

    fn get_routes(&self, query: &RouteQuery) -> Result<Vec<CandidateRoute>, RouteSourceError>;
}
