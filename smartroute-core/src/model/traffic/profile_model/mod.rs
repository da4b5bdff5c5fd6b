mod traffic_observation;
mod traffic_profile_config;
mod traffic_profile_model;
mod weekly_profile;

pub use traffic_observation::{read_observations, TrafficObservation};
pub use traffic_profile_config::TrafficProfileConfig;
pub use traffic_profile_model::{ProfileCell, TrafficProfileModel, TrafficProfileModelRecord};
pub use weekly_profile::WeeklyProfile;
