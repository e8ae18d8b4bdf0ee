//! A set of pairwise disjoint routes used together.

use af_graph::Route;

use crate::turn_cost;

/// Routes the ants will be spread over, sorted by ascending length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    routes: Vec<Route>,
}

impl RouteGroup {
    /// Sort `routes` by length (stable) and wrap them.
    pub fn new(mut routes: Vec<Route>) -> Self {
        routes.sort_by_key(Route::len);
        Self { routes }
    }

    #[inline]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Longest member, in nodes.
    pub fn max_len(&self) -> usize {
        self.routes.last().map_or(0, Route::len)
    }

    /// Turns to drain `ant_count` ants through this group.
    ///
    /// With fewer ants than routes only the shortest `ant_count` routes are
    /// used, so the longest *used* route sets the tail.  An empty group never
    /// drains and reports `usize::MAX`.
    pub fn turns(&self, ant_count: usize) -> usize {
        if self.routes.is_empty() {
            return usize::MAX;
        }
        let used = ant_count.clamp(1, self.routes.len());
        turn_cost(ant_count, self.routes.len(), self.routes[used - 1].len())
    }

    /// `true` if no two members share an interior node.
    pub fn is_pairwise_disjoint(&self) -> bool {
        self.routes.iter().enumerate().all(|(i, a)| {
            self.routes[i + 1..].iter().all(|b| a.is_disjoint(b))
        })
    }
}
