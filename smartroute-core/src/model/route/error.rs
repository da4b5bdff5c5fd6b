#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidRouteError {
    #[error("route has no legs")]
    NoLegs,
    #[error("leg {leg} has duration of {seconds} seconds, must be finite and positive")]
    InvalidDuration { leg: usize, seconds: f64 },
    #[error("{context} has distance of {meters} meters, must be finite and non-negative")]
    InvalidDistance { context: String, meters: f64 },
    #[error("{context} has an invalid coordinate: {message}")]
    InvalidCoordinate { context: String, message: String },
}
