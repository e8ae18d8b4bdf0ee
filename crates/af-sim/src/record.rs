//! What happened in one step.

use af_core::{AntId, NodeId, Step};

/// A single ant entering a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub ant: AntId,
    pub to:  NodeId,
}

/// Every move made during one step: advances first (launch order), then
/// launches (queue order).  Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub step:  Step,
    pub moves: Vec<Move>,
}
