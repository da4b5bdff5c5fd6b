use crate::model::traffic::profile_model::TrafficProfileConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelTrafficSourceConfig {
    /// name of the model in the model store
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// CSV of traffic observations used to train the model when it is not found in
    /// the store. if omitted, a missing model is an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_file: Option<String>,
    /// resolution used when training a new model
    #[serde(default)]
    pub profile: TrafficProfileConfig,
}

impl Default for ModelTrafficSourceConfig {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            training_file: None,
            profile: TrafficProfileConfig::default(),
        }
    }
}

fn default_model_name() -> String {
    String::from("traffic")
}
