//! Colony graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency is stored in **Compressed Sparse Row (CSR)** form.  The neighbors
//! of `NodeId n` are the slice
//!
//! ```text
//! adj[ node_adj_start[n] .. node_adj_start[n+1] ]
//! ```
//!
//! Every undirected link appears twice, once under each endpoint.  Within a
//! node's slice neighbors keep link insertion order, which fixes the order in
//! which routes are enumerated.

use rustc_hash::FxHashMap;
use tracing::debug;

use af_core::{Coord, NodeId};

use crate::{GraphError, GraphResult};

// ── NodeRole ──────────────────────────────────────────────────────────────────

/// Whether a node is one of the two terminals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeRole {
    #[default]
    Interior,
    Start,
    End,
}

// ── ColonyGraph ───────────────────────────────────────────────────────────────

/// Undirected colony graph with a unique start and end node.
///
/// Immutable once built.  Route extraction never edits the graph; heuristics
/// that need to hide nodes keep their own exclusion set.  Construct with
/// [`ColonyGraphBuilder`].
#[derive(Debug, Clone)]
pub struct ColonyGraph {
    /// Name of each node.  Indexed by `NodeId`.
    pub node_name: Vec<String>,

    /// Input coordinate of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Coord>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_adj_start: Vec<u32>,

    /// Flattened neighbor lists.
    pub adj: Vec<NodeId>,

    pub start: NodeId,
    pub end: NodeId,

    index: FxHashMap<String, NodeId>,
}

impl ColonyGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.adj.len() / 2
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Neighbors of `node` in link insertion order.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.node_adj_start[node.index()] as usize;
        let end   = self.node_adj_start[node.index() + 1] as usize;
        &self.adj[start..end]
    }

    #[inline]
    pub fn name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// `true` for the start and end nodes, which any number of ants may share.
    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        node == self.start || node == self.end
    }

    pub fn are_linked(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }
}

// ── ColonyGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`ColonyGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use af_core::Coord;
/// use af_graph::{ColonyGraphBuilder, NodeRole};
///
/// let mut b = ColonyGraphBuilder::new();
/// let a = b.add_node("A", Coord::new(0, 0), NodeRole::Start).unwrap();
/// let c = b.add_node("C", Coord::new(2, 0), NodeRole::End).unwrap();
/// b.add_link(a, c);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.link_count(), 1);
/// ```
#[derive(Default)]
pub struct ColonyGraphBuilder {
    names:     Vec<String>,
    coords:    Vec<Coord>,
    index:     FxHashMap<String, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    start:     Option<NodeId>,
    end:       Option<NodeId>,
}

impl ColonyGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        pos:  Coord,
        role: NodeRole,
    ) -> GraphResult<NodeId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }
        match role {
            NodeRole::Start if self.start.is_some() => return Err(GraphError::DuplicateStart(name)),
            NodeRole::End if self.end.is_some() => return Err(GraphError::DuplicateEnd(name)),
            _ => {}
        }

        let id = NodeId::try_from(self.names.len())
            .map_err(|_| GraphError::TooManyNodes(self.names.len()))?;
        match role {
            NodeRole::Start => self.start = Some(id),
            NodeRole::End => self.end = Some(id),
            NodeRole::Interior => {}
        }
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.coords.push(pos);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Link `a` and `b` in both directions.
    ///
    /// Returns `false` (and changes nothing) for a self-link or a link that
    /// already exists: neither can contribute to a simple route.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b || self.adjacency[a.index()].contains(&b) {
            debug!(a = %self.names[a.index()], b = %self.names[b.index()], "ignoring redundant link");
            return false;
        }
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        true
    }

    /// Link two nodes by name.
    pub fn add_link_by_name(&mut self, a: &str, b: &str) -> GraphResult<bool> {
        let a = self.node_id(a).ok_or_else(|| GraphError::UnknownNode(a.to_owned()))?;
        let b = self.node_id(b).ok_or_else(|| GraphError::UnknownNode(b.to_owned()))?;
        Ok(self.add_link(a, b))
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Consume the builder and produce a [`ColonyGraph`].
    ///
    /// Fails if either terminal was never declared.
    pub fn build(self) -> GraphResult<ColonyGraph> {
        let start = self.start.ok_or(GraphError::MissingStart)?;
        let end   = self.end.ok_or(GraphError::MissingEnd)?;

        let node_count = self.names.len();
        let mut node_adj_start = Vec::with_capacity(node_count + 1);
        let mut adj = Vec::with_capacity(self.adjacency.iter().map(Vec::len).sum());
        node_adj_start.push(0u32);
        for neighbors in &self.adjacency {
            adj.extend_from_slice(neighbors);
            node_adj_start.push(adj.len() as u32);
        }

        Ok(ColonyGraph {
            node_name: self.names,
            node_pos:  self.coords,
            node_adj_start,
            adj,
            start,
            end,
            index: self.index,
        })
    }
}
