use crate::model::store::ModelStoreError;

#[derive(thiserror::Error, Debug)]
pub enum TrafficSourceError {
    #[error("traffic model '{0}' is not ready, call ensure_ready before predicting")]
    ModelNotReady(String),
    #[error("traffic model '{name}' is unavailable: {message}")]
    ModelUnavailable { name: String, message: String },
    #[error("failure predicting traffic intensity with {source_name}: {message}")]
    Prediction {
        source_name: String,
        message: String,
    },
    #[error("failure training traffic model: {0}")]
    Training(String),
    #[error("failure reading training data from '{path}': {message}")]
    TrainingData { path: String, message: String },
    #[error(transparent)]
    Store(#[from] ModelStoreError),
    #[error("invalid traffic source configuration: {0}")]
    Configuration(String),
}
