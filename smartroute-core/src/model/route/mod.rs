mod candidate_route;
mod error;
mod route_leg;
mod route_segment;
mod route_step;

pub mod route_ops;

pub use candidate_route::CandidateRoute;
pub use error::InvalidRouteError;
pub use route_leg::RouteLeg;
pub use route_segment::RouteSegment;
pub use route_step::RouteStep;
