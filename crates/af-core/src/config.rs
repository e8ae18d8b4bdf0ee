//! Solver configuration.
//!
//! Defaults reproduce the classic behaviour: exhaustive search up to 200
//! nodes, at most 10 disjoint routes above that.  The binary optionally loads
//! overrides from a JSON file (feature `serde`); missing keys keep their
//! defaults.

#[cfg(feature = "serde")]
use std::io::Read;
#[cfg(feature = "serde")]
use std::path::Path;

use crate::{CoreError, CoreResult};

/// Knobs for route enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Graphs with strictly more nodes than this use the bounded
    /// shortest-route heuristic instead of exhaustive enumeration.
    pub large_graph_threshold: usize,

    /// Maximum number of disjoint routes extracted by the heuristic (`K`).
    pub max_disjoint_routes: usize,
}

impl SolverConfig {
    pub const DEFAULT_LARGE_GRAPH_THRESHOLD: usize = 200;
    pub const DEFAULT_MAX_DISJOINT_ROUTES: usize = 10;

    /// `true` if a graph with `node_count` nodes should skip exhaustive search.
    #[inline]
    pub fn is_large(&self, node_count: usize) -> bool {
        node_count > self.large_graph_threshold
    }

    /// Reject settings the solver cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_disjoint_routes == 0 {
            return Err(CoreError::Config(
                "max_disjoint_routes must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let config: SolverConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_json_reader`](Self::from_json_reader) but opens `path`.
    #[cfg(feature = "serde")]
    pub fn from_json_path(path: &Path) -> CoreResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            large_graph_threshold: Self::DEFAULT_LARGE_GRAPH_THRESHOLD,
            max_disjoint_routes:   Self::DEFAULT_MAX_DISJOINT_ROUTES,
        }
    }
}
