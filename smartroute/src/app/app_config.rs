use super::AppError;
use crate::directions::google::GoogleDirectionsClient;
use crate::directions::DirectionsConfig;
use crate::optimizer::RouteOptimizer;
use crate::server::ServerConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use smartroute_core::model::scoring::ScoringPolicy;
use smartroute_core::model::store::ModelStore;
use smartroute_core::model::traffic::{TrafficIntensitySource, TrafficSourceConfig};
use std::path::Path;
use std::sync::Arc;

/// prefix of environment variables that override file configuration, for example
/// `SMARTROUTE__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "SMARTROUTE";

/// top-level configuration of the smart route service and command line tools.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub directions: DirectionsConfig,
    #[serde(default)]
    pub scoring: ScoringPolicy,
    #[serde(default)]
    pub traffic: TrafficSourceConfig,
    #[serde(default)]
    pub model_store: ModelStoreConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelStoreConfig {
    /// directory holding `<name>_model.json` files
    #[serde(default = "default_model_directory")]
    pub directory: String,
}

impl Default for ModelStoreConfig {
    fn default() -> Self {
        ModelStoreConfig {
            directory: default_model_directory(),
        }
    }
}

impl AppConfig {
    /// reads configuration from an optional file, then applies environment overrides.
    /// without a file, every value starts from its default.
    pub fn load(config_file: Option<&Path>) -> Result<AppConfig, AppError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| match config_file {
                Some(path) => AppError::Configuration(format!(
                    "file '{}' produced error: {e}",
                    path.display()
                )),
                None => AppError::Configuration(e.to_string()),
            })?;
        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        app_config
            .scoring
            .validate()
            .map_err(AppError::Configuration)?;
        log::debug!("loaded configuration: {app_config:?}");
        Ok(app_config)
    }

    pub fn model_store(&self) -> Result<ModelStore, AppError> {
        Ok(ModelStore::new(&self.model_store.directory)?)
    }

    /// builds the configured traffic source. model sources are not yet ready.
    pub fn build_traffic_source(&self) -> Result<Arc<dyn TrafficIntensitySource>, AppError> {
        let store = self.model_store()?;
        Ok(self.traffic.build(&store)?)
    }

    /// wires the Google Directions client, the traffic source and the scoring policy
    /// into a ready route optimizer.
    pub fn build_optimizer(&self) -> Result<RouteOptimizer, AppError> {
        let route_source = GoogleDirectionsClient::new(&self.directions)?;
        let traffic_source = self.build_traffic_source()?;
        let optimizer =
            RouteOptimizer::new(Arc::new(route_source), traffic_source, self.scoring.clone())?;
        optimizer.ensure_ready()?;
        Ok(optimizer)
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self).map_err(|e| AppError::Output(e.to_string()))
    }
}

fn default_model_directory() -> String {
    String::from("models")
}

#[cfg(test)]
mod test {
    use super::*;
    use smartroute_core::model::traffic::model_source::ModelTrafficSourceConfig;

    #[test]
    fn test_default_toml_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smartroute.toml");
        let default = AppConfig::default();
        std::fs::write(&path, default.to_toml().unwrap()).unwrap();
        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.traffic, default.traffic);
        assert_eq!(loaded.scoring, default.scoring);
        assert_eq!(loaded.model_store, default.model_store);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smartroute.toml");
        std::fs::write(
            &path,
            r#"
[scoring]
type = "multiplicative"

[traffic]
type = "model"
model_name = "denver"
training_file = "observations.csv"

[model_store]
directory = "/tmp/smartroute-models"
"#,
        )
        .unwrap();
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.scoring, ScoringPolicy::multiplicative());
        assert_eq!(
            config.traffic,
            TrafficSourceConfig::Model(ModelTrafficSourceConfig {
                model_name: String::from("denver"),
                training_file: Some(String::from("observations.csv")),
                ..Default::default()
            })
        );
        assert_eq!(config.model_store.directory, "/tmp/smartroute-models");
        assert_eq!(config.directions.traffic_model, "best_guess");
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smartroute.toml");
        std::fs::write(&path, "[scoring]\ntype = \"blended\"\ntraffic_weight = -1.0\n").unwrap();
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_build_traffic_source_uses_rule_table_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            model_store: ModelStoreConfig {
                directory: dir.path().join("models").to_string_lossy().to_string(),
            },
            ..Default::default()
        };
        let source = config.build_traffic_source().unwrap();
        assert!(source.ensure_ready().is_ok());
        assert_eq!(source.name(), "Peak Hour Rule Table");
    }
}
