use crate::model::traffic::profile_model::TrafficProfileModel;
use std::sync::Arc;

/// lifecycle of a model-backed traffic source.
#[derive(Clone, Debug, Default)]
pub enum ModelState {
    /// no model has been loaded or trained yet
    #[default]
    Untrained,
    /// a model is loaded and can serve predictions
    Ready(Arc<TrafficProfileModel>),
}

impl ModelState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }
}
