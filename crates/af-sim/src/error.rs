use af_core::Step;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("no ants to move")]
    NoAnts,

    #[error("route group is empty")]
    EmptyGroup,

    #[error("route {route} does not run from the start node to the end node")]
    RouteEndpoints { route: usize },

    #[error("route {route} steps from {from} to {to}, which are not linked")]
    BrokenRoute { route: usize, from: String, to: String },

    #[error("routes {a} and {b} share an interior node")]
    OverlappingRoutes { a: usize, b: usize },

    #[error("no ant could move at step {step} with {remaining} ants still en route")]
    Stalled { step: Step, remaining: usize },
}

pub type SimResult<T> = Result<T, SimError>;
