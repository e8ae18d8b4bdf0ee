//! Validating constructor for [`Simulator`].

use std::collections::VecDeque;

use af_core::{NodeId, Step};
use af_graph::ColonyGraph;
use af_plan::RouteGroup;

use crate::{assign_ants, SimError, SimResult, Simulator};

/// Checks a route group against its graph and sets up the launch queue.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&colony.graph, &plan.group, colony.ant_count).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'a> {
    graph:     &'a ColonyGraph,
    group:     &'a RouteGroup,
    ant_count: usize,
}

impl<'a> SimBuilder<'a> {
    pub fn new(graph: &'a ColonyGraph, group: &'a RouteGroup, ant_count: usize) -> Self {
        Self { graph, group, ant_count }
    }

    /// Validate the inputs, assign every ant, and return a ready-to-run
    /// [`Simulator`] with all ants waiting in the start node.
    pub fn build(self) -> SimResult<Simulator<'a>> {
        if self.ant_count == 0 {
            return Err(SimError::NoAnts);
        }
        if self.group.is_empty() {
            return Err(SimError::EmptyGroup);
        }
        self.check_routes()?;

        let ants = assign_ants(self.group, self.ant_count);
        let waiting: VecDeque<usize> = (0..ants.len()).collect();

        Ok(Simulator {
            graph:    self.graph,
            routes:   self.group.routes(),
            ants,
            waiting,
            moving:   Vec::new(),
            occupied: vec![false; self.graph.node_count()],
            step:     Step::ZERO,
            finished: 0,
        })
    }

    fn check_routes(&self) -> SimResult<()> {
        let g = self.graph;
        let routes = self.group.routes();

        for (i, route) in routes.iter().enumerate() {
            if route.hops() == 0 || route.first() != g.start || route.last() != g.end {
                return Err(SimError::RouteEndpoints { route: i });
            }
            for pair in route.nodes().windows(2) {
                let (from, to) = (pair[0], pair[1]);
                let known = from.index() < g.node_count() && to.index() < g.node_count();
                if !known || !g.are_linked(from, to) {
                    return Err(SimError::BrokenRoute {
                        route: i,
                        from:  node_label(g, from),
                        to:    node_label(g, to),
                    });
                }
            }
        }

        for (a, ra) in routes.iter().enumerate() {
            for (b, rb) in routes.iter().enumerate().skip(a + 1) {
                if !ra.is_disjoint(rb) {
                    return Err(SimError::OverlappingRoutes { a, b });
                }
            }
        }
        Ok(())
    }
}

/// The node's name, or `#<index>` for an id the graph does not know.
fn node_label(graph: &ColonyGraph, node: NodeId) -> String {
    if node.index() < graph.node_count() {
        graph.name(node).to_owned()
    } else {
        format!("#{}", node.index())
    }
}
