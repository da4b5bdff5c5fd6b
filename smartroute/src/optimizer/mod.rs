mod error;
mod optimal_route;
mod route_optimizer;
mod traffic_prediction;

pub use error::OptimizerError;
pub use optimal_route::{OptimalRoute, StepSummary, TextValue};
pub use route_optimizer::RouteOptimizer;
pub use traffic_prediction::{Location, TrafficPrediction};
