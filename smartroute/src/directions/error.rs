use smartroute_core::model::route::InvalidRouteError;

#[derive(thiserror::Error, Debug)]
pub enum RouteSourceError {
    #[error("route source is misconfigured: {0}")]
    Configuration(String),
    #[error("request to route source failed: {0}")]
    Request(String),
    #[error("request to route source timed out: {0}")]
    Timeout(String),
    #[error("route source responded with status {status}: {message}")]
    Upstream { status: String, message: String },
    #[error("unable to read route source response: {0}")]
    Deserialize(String),
    #[error("all {count} routes from route source are invalid, route {index}: {source}")]
    NoValidRoutes {
        count: usize,
        index: usize,
        source: InvalidRouteError,
    },
}
