mod error;
mod model_store;

pub use error::ModelStoreError;
pub use model_store::{ModelStore, MODEL_FILE_SUFFIX};
