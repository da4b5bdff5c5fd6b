mod error;
mod traffic_features;
mod traffic_source;
mod traffic_source_config;

pub mod model_source;
pub mod peak_hour;
pub mod profile_model;

pub use error::TrafficSourceError;
pub use traffic_features::TrafficFeatures;
pub use traffic_source::TrafficIntensitySource;
pub use traffic_source_config::TrafficSourceConfig;
