//! The parsed problem instance.

use crate::ColonyGraph;

/// A colony graph together with the ant population that must cross it and
/// the input lines it was read from (echoed verbatim before the trace).
#[derive(Debug, Clone)]
pub struct Colony {
    /// Number of ants waiting at the start node.  Always positive.
    pub ant_count: usize,

    pub graph: ColonyGraph,

    /// Every input line in original order, comments and commands included.
    pub input: Vec<String>,
}
