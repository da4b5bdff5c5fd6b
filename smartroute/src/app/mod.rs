mod app_config;
mod error;
mod smartroute_app;

pub use app_config::{AppConfig, ModelStoreConfig, ENV_PREFIX};
pub use error::AppError;
pub use smartroute_app::{ModelsOperation, SmartRouteApp, SmartRouteOperation};
