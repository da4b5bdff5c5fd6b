mod directions_config;
mod error;
pub mod google;
mod route_query;
mod route_source;

pub use directions_config::{DirectionsConfig, GOOGLE_MAPS_API_KEY_ENV};
pub use error::RouteSourceError;
pub use route_query::RouteQuery;
pub use route_source::RouteSource;
