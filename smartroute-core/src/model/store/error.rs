use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ModelStoreError {
    #[error("no model found with name '{0}'")]
    NotFound(String),
    #[error("invalid model name '{name}': {message}")]
    InvalidName { name: String, message: String },
    #[error("failure reading model from '{path}': {message}")]
    Read { path: PathBuf, message: String },
    #[error("failure writing model to '{path}': {message}")]
    Write { path: PathBuf, message: String },
    #[error("failure deserializing model from '{path}': {source}")]
    Deserialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failure serializing model '{name}': {source}")]
    Serialize {
        name: String,
        source: serde_json::Error,
    },
}
