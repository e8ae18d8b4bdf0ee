//! Per-ant simulation state.

use af_core::AntId;

/// One ant and its position along its assigned route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ant {
    pub id: AntId,

    /// Index of the assigned route within the group.
    pub route: usize,

    /// Index of the ant's current node within its route; `0` is the start.
    pub progress: usize,

    pub finished: bool,
}

impl Ant {
    pub fn new(id: AntId, route: usize) -> Self {
        Self { id, route, progress: 0, finished: false }
    }

    /// `true` while the ant is still in the start node.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.progress == 0 && !self.finished
    }
}
