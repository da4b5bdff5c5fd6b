mod api;
mod api_error;
mod handlers;
mod server_config;

pub use api::{router, serve, ApiState};
pub use api_error::ApiError;
pub use handlers::{HealthStatus, RouteRequest, TrafficQuery};
pub use server_config::ServerConfig;
