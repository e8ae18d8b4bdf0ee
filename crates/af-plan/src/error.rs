use af_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no route from {from} to {to}")]
    NoRouteFound { from: String, to: String },

    #[error("no valid group of disjoint routes")]
    NoValidGroupFound,

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type PlanResult<T> = Result<T, PlanError>;
