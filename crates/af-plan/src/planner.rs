//! Size-based strategy selection and the end-to-end planning call.

use std::fmt;

use tracing::{debug, info};

use af_core::SolverConfig;
use af_graph::{Colony, ColonyGraph, DisjointShortestFinder, ExhaustiveFinder, RouteFinder};

use crate::{select_best_group, PlanError, PlanResult, RouteGroup};

/// How candidate routes were produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// All simple routes, exhaustive disjoint-subset search.
    Exhaustive,
    /// Up to `K` disjoint shortest routes, all of them used.
    DisjointShortest,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Exhaustive => f.write_str("exhaustive"),
            Strategy::DisjointShortest => f.write_str("disjoint-shortest"),
        }
    }
}

/// The outcome of planning: which routes to use and what they cost.
#[derive(Debug, Clone)]
pub struct Plan {
    pub group: RouteGroup,
    pub strategy: Strategy,
    /// Number of candidate routes the selector chose from.
    pub candidates: usize,
    /// Estimated turns, `ceil(ants / routes) + (longest - 1)`.
    pub turns: usize,
}

/// Runs enumeration and selection for a colony.
///
/// # Example
///
/// ```rust,ignore
/// let planner = Planner::new(SolverConfig::default())?;
/// let plan = planner.plan(&colony)?;
/// println!("{} routes, {} turns", plan.group.len(), plan.turns);
/// ```
pub struct Planner {
    config: SolverConfig,
}

impl Planner {
    /// Validate `config` and build a planner.
    pub fn new(config: SolverConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn strategy_for(&self, graph: &ColonyGraph) -> Strategy {
        if self.config.is_large(graph.node_count()) {
            Strategy::DisjointShortest
        } else {
            Strategy::Exhaustive
        }
    }

    pub fn plan(&self, colony: &Colony) -> PlanResult<Plan> {
        self.plan_graph(&colony.graph, colony.ant_count)
    }

    /// Plan the crossing of `ant_count` ants over `graph`.
    pub fn plan_graph(&self, graph: &ColonyGraph, ant_count: usize) -> PlanResult<Plan> {
        let strategy = self.strategy_for(graph);
        debug!(nodes = graph.node_count(), %strategy, "planning");

        let routes = match strategy {
            Strategy::Exhaustive => ExhaustiveFinder.find_routes(graph),
            Strategy::DisjointShortest => {
                DisjointShortestFinder::new(self.config.max_disjoint_routes).find_routes(graph)
            }
        };
        if routes.is_empty() {
            return Err(PlanError::NoRouteFound {
                from: graph.name(graph.start).to_owned(),
                to:   graph.name(graph.end).to_owned(),
            });
        }

        let candidates = routes.len();
        let group = match strategy {
            Strategy::Exhaustive => select_best_group(ant_count, &routes)?,
            // Already disjoint by construction; every extracted route is used.
            Strategy::DisjointShortest => RouteGroup::new(routes),
        };
        let turns = group.turns(ant_count);

        info!(
            %strategy,
            candidates,
            routes = group.len(),
            longest = group.max_len(),
            turns,
            "plan ready"
        );
        for route in group.routes() {
            debug!(len = route.len(), route = %route.describe(graph), "using route");
        }

        Ok(Plan { group, strategy, candidates, turns })
    }
}
