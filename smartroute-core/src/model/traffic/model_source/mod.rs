mod model_state;
mod model_traffic_source;
mod model_traffic_source_config;

pub use model_state::ModelState;
pub use model_traffic_source::ModelTrafficSource;
pub use model_traffic_source_config::ModelTrafficSourceConfig;
