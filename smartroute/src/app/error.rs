use crate::directions::RouteSourceError;
use crate::optimizer::OptimizerError;
use smartroute_core::model::store::ModelStoreError;
use smartroute_core::model::traffic::TrafficSourceError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading configuration: {0}")]
    Configuration(String),
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    Optimizer(#[from] OptimizerError),
    #[error(transparent)]
    RouteSource(#[from] RouteSourceError),
    #[error(transparent)]
    TrafficSource(#[from] TrafficSourceError),
    #[error(transparent)]
    ModelStore(#[from] ModelStoreError),
    #[error("failure writing output: {0}")]
    Output(String),
    #[error("failure running server: {0}")]
    Server(String),
}
