use super::model_source::{ModelTrafficSource, ModelTrafficSourceConfig};
use super::peak_hour::{PeakHourConfig, PeakHourTrafficSource};
use super::{TrafficIntensitySource, TrafficSourceError};
use crate::model::store::ModelStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// selects and configures the traffic intensity source.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TrafficSourceConfig {
    /// fixed rule table by hour of week
    RuleBased(PeakHourConfig),
    /// trained traffic profile model read from the model store
    Model(ModelTrafficSourceConfig),
}

impl Default for TrafficSourceConfig {
    fn default() -> Self {
        TrafficSourceConfig::RuleBased(PeakHourConfig::default())
    }
}

impl TrafficSourceConfig {
    /// builds the configured source. model-backed sources are returned untrained, the
    /// caller is responsible for calling [`TrafficIntensitySource::ensure_ready`].
    pub fn build(
        &self,
        store: &ModelStore,
    ) -> Result<Arc<dyn TrafficIntensitySource>, TrafficSourceError> {
        match self {
            TrafficSourceConfig::RuleBased(config) => {
                let source = PeakHourTrafficSource::try_from(config.clone())?;
                Ok(Arc::new(source))
            }
            TrafficSourceConfig::Model(config) => {
                config
                    .profile
                    .validate()
                    .map_err(TrafficSourceError::Configuration)?;
                let source = ModelTrafficSource::new(config.clone(), store.clone());
                Ok(Arc::new(source))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::traffic::TrafficFeatures;

    #[test]
    fn test_deserialize_rule_based_with_defaults() {
        let config: TrafficSourceConfig =
            serde_json::from_str(r#"{ "type": "rule_based" }"#).unwrap();
        assert_eq!(config, TrafficSourceConfig::default());
    }

    #[test]
    fn test_deserialize_model() {
        let config: TrafficSourceConfig = serde_json::from_str(
            r#"{ "type": "model", "model_name": "denver", "training_file": "obs.csv" }"#,
        )
        .unwrap();
        match config {
            TrafficSourceConfig::Model(c) => {
                assert_eq!(c.model_name, "denver");
                assert_eq!(c.training_file.as_deref(), Some("obs.csv"));
                assert_eq!(c.profile.cell_size_degrees, 0.01);
            }
            other => panic!("expected model config, found {other:?}"),
        }
    }

    #[test]
    fn test_build_sources() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path()).unwrap();
        let features = TrafficFeatures::new(8, 5, 39.74, -104.99);

        let rules = TrafficSourceConfig::default().build(&store).unwrap();
        rules.ensure_ready().unwrap();
        assert_eq!(rules.predict(&features).unwrap(), 1.0);

        let model = TrafficSourceConfig::Model(ModelTrafficSourceConfig::default())
            .build(&store)
            .unwrap();
        assert!(model.predict(&features).is_err());
    }
}
