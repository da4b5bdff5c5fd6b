use super::{ModelState, ModelTrafficSourceConfig};
use crate::model::store::{ModelStore, ModelStoreError};
use crate::model::traffic::profile_model::{self, TrafficProfileModel};
use crate::model::traffic::{TrafficFeatures, TrafficIntensitySource, TrafficSourceError};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// traffic intensity backed by a trained [`TrafficProfileModel`].
///
/// the source starts [`ModelState::Untrained`] and only serves predictions after
/// [`ModelTrafficSource::ensure_ready`] (or [`ModelTrafficSource::train`]) has moved it
/// to [`ModelState::Ready`].
pub struct ModelTrafficSource {
    pub config: ModelTrafficSourceConfig,
    store: ModelStore,
    state: RwLock<ModelState>,
}

impl ModelTrafficSource {
    pub fn new(config: ModelTrafficSourceConfig, store: ModelStore) -> ModelTrafficSource {
        ModelTrafficSource {
            config,
            store,
            state: RwLock::new(ModelState::Untrained),
        }
    }

    /// builds a source that is already ready with the provided model.
    pub fn with_model(
        config: ModelTrafficSourceConfig,
        store: ModelStore,
        model: TrafficProfileModel,
    ) -> ModelTrafficSource {
        ModelTrafficSource {
            config,
            store,
            state: RwLock::new(ModelState::Ready(Arc::new(model))),
        }
    }

    pub fn state(&self) -> Result<ModelState, TrafficSourceError> {
        let guard = self.state.read().map_err(|_| self.poisoned())?;
        Ok(guard.clone())
    }

    /// trains a new model from a CSV of observations, stores it under the configured
    /// model name and makes it the active model.
    pub fn train<P: AsRef<Path>>(
        &self,
        training_file: P,
    ) -> Result<Arc<TrafficProfileModel>, TrafficSourceError> {
        let model = self.fit_and_store(training_file)?;
        let mut guard = self.state.write().map_err(|_| self.poisoned())?;
        *guard = ModelState::Ready(model.clone());
        Ok(model)
    }

    /// loads the model from the store, training it first if it is missing and a
    /// training file is configured.
    fn load_or_train(&self) -> Result<Arc<TrafficProfileModel>, TrafficSourceError> {
        let name = &self.config.model_name;
        match self.store.load::<TrafficProfileModel>(name) {
            Ok(model) => {
                log::info!(
                    "loaded traffic model '{name}' ({} observations)",
                    model.observation_count()
                );
                Ok(Arc::new(model))
            }
            Err(ModelStoreError::NotFound(_)) => match &self.config.training_file {
                Some(training_file) => {
                    log::info!("traffic model '{name}' not found, training from {training_file}");
                    self.fit_and_store(training_file)
                }
                None => Err(TrafficSourceError::ModelUnavailable {
                    name: name.clone(),
                    message: format!(
                        "not found in {} and no training file is configured",
                        self.store.directory().display()
                    ),
                }),
            },
            Err(e) => Err(TrafficSourceError::ModelUnavailable {
                name: name.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// trains on the observations in `training_file` and saves the result under the
    /// configured model name without activating it.
    fn fit_and_store<P: AsRef<Path>>(
        &self,
        training_file: P,
    ) -> Result<Arc<TrafficProfileModel>, TrafficSourceError> {
        let observations = profile_model::read_observations(training_file)?;
        let model = TrafficProfileModel::train(&observations, self.config.profile.clone())?;
        self.store.save(&self.config.model_name, &model)?;
        Ok(Arc::new(model))
    }

    fn poisoned(&self) -> TrafficSourceError {
        TrafficSourceError::ModelUnavailable {
            name: self.config.model_name.clone(),
            message: String::from("model state lock is poisoned"),
        }
    }
}

impl TrafficIntensitySource for ModelTrafficSource {
    fn name(&self) -> String {
        format!("Traffic Profile Model ({})", self.config.model_name)
    }

    fn predict(&self, features: &TrafficFeatures) -> Result<f64, TrafficSourceError> {
        features
            .validate()
            .map_err(|message| TrafficSourceError::Prediction {
                source_name: self.name(),
                message,
            })?;
        let guard = self.state.read().map_err(|_| self.poisoned())?;
        match &*guard {
            ModelState::Untrained => Err(TrafficSourceError::ModelNotReady(
                self.config.model_name.clone(),
            )),
            ModelState::Ready(model) => Ok(model.predict(features)),
        }
    }

    fn ensure_ready(&self) -> Result<(), TrafficSourceError> {
        if self.state()?.is_ready() {
            return Ok(());
        }
        let mut guard = self.state.write().map_err(|_| self.poisoned())?;
        if guard.is_ready() {
            return Ok(());
        }
        let model = self.load_or_train()?;
        *guard = ModelState::Ready(model);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn write_training_file(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("observations.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "timestamp,latitude,longitude,intensity").unwrap();
        writeln!(file, "2024-05-06 08:00:00,39.745,-104.995,1.9").unwrap();
        writeln!(file, "2024-05-06 13:00:00,39.745,-104.995,1.3").unwrap();
        path
    }

    fn features() -> TrafficFeatures {
        TrafficFeatures::new(8, 0, 39.7451, -104.9951)
    }

    #[test]
    fn test_predict_before_ready_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path()).unwrap();
        let source = ModelTrafficSource::new(ModelTrafficSourceConfig::default(), store);
        assert!(!source.state().unwrap().is_ready());
        let result = source.predict(&features());
        assert!(matches!(result, Err(TrafficSourceError::ModelNotReady(_))));
    }

    #[test]
    fn test_ensure_ready_without_model_or_training_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path()).unwrap();
        let source = ModelTrafficSource::new(ModelTrafficSourceConfig::default(), store);
        let result = source.ensure_ready();
        assert!(matches!(
            result,
            Err(TrafficSourceError::ModelUnavailable { .. })
        ));
        assert!(!source.state().unwrap().is_ready());
    }

    #[test]
    fn test_ensure_ready_trains_and_persists_on_miss() {
        let dir = tempfile::tempdir().unwrap();
        let training_file = write_training_file(dir.path());
        let store = ModelStore::new(dir.path().join("models")).unwrap();
        let config = ModelTrafficSourceConfig {
            training_file: Some(training_file.to_string_lossy().to_string()),
            ..Default::default()
        };
        let source = ModelTrafficSource::new(config, store.clone());
        source.ensure_ready().unwrap();
        assert!(source.state().unwrap().is_ready());
        assert!(store.contains("traffic"));
        assert!((source.predict(&features()).unwrap() - 1.9).abs() < 1e-9);

        // a second source loads the stored model instead of training
        let reloaded = ModelTrafficSource::new(ModelTrafficSourceConfig::default(), store);
        reloaded.ensure_ready().unwrap();
        assert_eq!(
            reloaded.predict(&features()).unwrap(),
            source.predict(&features()).unwrap()
        );
    }

    #[test]
    fn test_train_replaces_active_model() {
        let dir = tempfile::tempdir().unwrap();
        let training_file = write_training_file(dir.path());
        let store = ModelStore::new(dir.path().join("models")).unwrap();
        let source = ModelTrafficSource::new(ModelTrafficSourceConfig::default(), store.clone());
        assert!(!store.contains("traffic"));
        let model = source.train(&training_file).unwrap();
        assert_eq!(model.observation_count(), 2);
        assert!(store.contains("traffic"));
        let afternoon = TrafficFeatures::new(13, 0, 39.7451, -104.9951);
        assert!((source.predict(&afternoon).unwrap() - 1.3).abs() < 1e-9);
    }
}
