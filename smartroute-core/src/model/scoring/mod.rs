mod error;
mod route_scorer;
mod score_components;
mod scored_route;
mod scoring_policy;

pub use error::RouteScoringError;
pub use route_scorer::RouteScorer;
pub use score_components::ScoreComponents;
pub use scored_route::ScoredRoute;
pub use scoring_policy::ScoringPolicy;
