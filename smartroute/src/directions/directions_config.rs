use serde::{Deserialize, Serialize};

/// environment variable consulted when no api key is configured
pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DirectionsConfig {
    /// Google Maps api key. when absent, [`GOOGLE_MAPS_API_KEY_ENV`] is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// upper bound on a single directions request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// traffic model requested for duration estimates
    #[serde(default = "default_traffic_model")]
    pub traffic_model: String,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        DirectionsConfig {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            traffic_model: default_traffic_model(),
        }
    }
}

impl DirectionsConfig {
    /// the configured api key, falling back to the environment. blank keys count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(GOOGLE_MAPS_API_KEY_ENV).ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

fn default_base_url() -> String {
    String::from("https://maps.googleapis.com/maps/api/directions/json")
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_traffic_model() -> String {
    String::from("best_guess")
}
