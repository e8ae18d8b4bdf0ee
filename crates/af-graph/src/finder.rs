//! Route enumeration strategies.
//!
//! # Pluggability
//!
//! The planner calls enumeration through the [`RouteFinder`] trait and picks
//! an implementation by graph size:
//!
//! | Finder                     | Output                                   | Cost         |
//! |----------------------------|------------------------------------------|--------------|
//! | [`ExhaustiveFinder`]       | every simple start→end route             | exponential  |
//! | [`DisjointShortestFinder`] | up to `K` node-disjoint shortest routes  | O(K·(N+E))   |
//!
//! An empty result means start and end are disconnected; callers treat it as
//! a terminal error.

use std::collections::VecDeque;

use tracing::debug;

use af_core::NodeId;

use crate::{ColonyGraph, GraphError, GraphResult, Route};

// ── RouteFinder trait ─────────────────────────────────────────────────────────

/// Produces candidate start-to-end routes for a graph.
pub trait RouteFinder {
    /// Candidate routes in a stable, implementation-defined order.
    fn find_routes(&self, graph: &ColonyGraph) -> Vec<Route>;
}

// ── ExhaustiveFinder ──────────────────────────────────────────────────────────

/// Breadth-first enumeration of all simple routes.
///
/// Partial routes are extended by every neighbor of their last node that they
/// do not already contain.  A partial route that reaches the end node is
/// emitted and not extended.  Routes come out in non-decreasing length, ties
/// in neighbor insertion order.
pub struct ExhaustiveFinder;

impl RouteFinder for ExhaustiveFinder {
    fn find_routes(&self, graph: &ColonyGraph) -> Vec<Route> {
        let mut routes = Vec::new();
        let mut queue: VecDeque<Vec<NodeId>> = VecDeque::new();
        queue.push_back(vec![graph.start]);

        while let Some(partial) = queue.pop_front() {
            let Some(&last) = partial.last() else { continue };
            if last == graph.end {
                routes.push(Route::new(partial));
                continue;
            }

            for &next in graph.neighbors(last) {
                if partial.contains(&next) {
                    continue;
                }
                let mut extended = Vec::with_capacity(partial.len() + 1);
                extended.extend_from_slice(&partial);
                extended.push(next);
                queue.push_back(extended);
            }
        }

        debug!(routes = routes.len(), "exhaustive enumeration finished");
        routes
    }
}

// ── DisjointShortestFinder ────────────────────────────────────────────────────

/// Repeated shortest-route extraction with interior exclusion.
///
/// After each extracted route its interior nodes join an exclusion set, so
/// later searches cannot reuse them and the result is pairwise disjoint by
/// construction.  A direct start–end link is used at most once.  This is an
/// approximation: an early short route can block two longer ones that would
/// together carry more ants.
pub struct DisjointShortestFinder {
    /// Upper bound on routes extracted (`K`).
    pub max_routes: usize,
}

impl DisjointShortestFinder {
    pub fn new(max_routes: usize) -> Self {
        Self { max_routes }
    }
}

impl RouteFinder for DisjointShortestFinder {
    fn find_routes(&self, graph: &ColonyGraph) -> Vec<Route> {
        let mut excluded = vec![false; graph.node_count()];
        let mut allow_direct = true;
        let mut routes = Vec::new();

        while routes.len() < self.max_routes {
            let Ok(route) = shortest_route(graph, &excluded, allow_direct) else {
                break;
            };
            if route.is_direct() {
                allow_direct = false;
            }
            for &node in route.interior() {
                excluded[node.index()] = true;
            }
            routes.push(route);
        }

        debug!(
            routes = routes.len(),
            max_routes = self.max_routes,
            "disjoint extraction finished"
        );
        routes
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// Breadth-first shortest route from start to end avoiding `excluded` nodes.
///
/// `excluded` is indexed by `NodeId`; entries for the terminals are ignored.
/// With `allow_direct == false` a start–end link is skipped.  Among equally
/// short routes the one found first in neighbor insertion order wins.
pub fn shortest_route(
    graph:        &ColonyGraph,
    excluded:     &[bool],
    allow_direct: bool,
) -> GraphResult<Route> {
    let (start, end) = (graph.start, graph.end);
    let n = graph.node_count();
    // prev[v] = node that discovered v; INVALID until reached.
    let mut prev = vec![NodeId::INVALID; n];
    let mut seen = vec![false; n];
    seen[start.index()] = true;

    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &next in graph.neighbors(node) {
            if seen[next.index()] {
                continue;
            }
            if next != end && excluded[next.index()] {
                continue;
            }
            if node == start && next == end && !allow_direct {
                continue;
            }
            seen[next.index()] = true;
            prev[next.index()] = node;
            if next == end {
                return Ok(reconstruct(&prev, start, end));
            }
            queue.push_back(next);
        }
    }

    Err(GraphError::NoRoute {
        from: graph.name(start).to_owned(),
        to:   graph.name(end).to_owned(),
    })
}

fn reconstruct(prev: &[NodeId], start: NodeId, end: NodeId) -> Route {
    let mut nodes = vec![end];
    let mut cur = end;
    while cur != start {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Route::new(nodes)
}
