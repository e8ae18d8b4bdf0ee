//! Start-to-end routes.

use af_core::NodeId;

use crate::ColonyGraph;

/// A simple path from the start node to the end node, both included.
///
/// Length is measured in nodes, so a direct start–end link has length 2 and
/// an ant needs `len() - 1` steps to walk the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    nodes: Vec<NodeId>,
}

impl Route {
    /// Wrap an already validated node sequence.
    ///
    /// The caller guarantees the sequence starts at start, ends at end, has at
    /// least two nodes, and repeats none.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        debug_assert!(nodes.len() >= 2, "a route spans at least start and end");
        Self { nodes }
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Node count, terminals included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Steps an ant needs to walk the whole route.
    #[inline]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// `true` for a route made of a single start–end link.
    #[inline]
    pub fn is_direct(&self) -> bool {
        self.nodes.len() == 2
    }

    #[inline]
    pub fn first(&self) -> NodeId {
        self.nodes[0]
    }

    #[inline]
    pub fn last(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// The node an ant enters on launch.
    #[inline]
    pub fn first_hop(&self) -> NodeId {
        self.nodes[1]
    }

    /// Nodes strictly between start and end.
    #[inline]
    pub fn interior(&self) -> &[NodeId] {
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// `true` if the two routes share no interior node.
    pub fn is_disjoint(&self, other: &Route) -> bool {
        self.interior()
            .iter()
            .all(|node| !other.interior().contains(node))
    }

    /// Human-readable `A -> B -> C` form for diagnostics.
    pub fn describe(&self, graph: &ColonyGraph) -> String {
        self.nodes
            .iter()
            .map(|&n| graph.name(n))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
