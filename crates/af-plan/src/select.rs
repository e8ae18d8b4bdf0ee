//! Group selection: pick the disjoint route subset with the lowest turn cost.
//!
//! # Exhaustive search
//!
//! Candidates are stably sorted by length, then every pairwise disjoint
//! subset is visited depth-first by incremental extension: a candidate joins
//! the current group only if it shares no interior node with any member.  The
//! first subset reaching the minimum cost wins, so ties favour earlier
//! (shorter) candidates and smaller groups.
//!
//! Disjointness is checked against a running bitset of the group's interior
//! nodes, one `u64` word per 64 node ids.
//!
//! Extension stops once a group has at least as many routes as there are
//! ants: every further member is left without an ant and cannot lower the
//! cost.
//!
//! The search is exponential in the number of candidates, which is why
//! large graphs skip it and use their disjoint routes as extracted.

use tracing::debug;

use af_graph::Route;

use crate::{turn_cost, PlanError, PlanResult, RouteGroup};

// ── Public API ────────────────────────────────────────────────────────────────

/// Exhaustively choose the cheapest pairwise-disjoint subset of `candidates`.
///
/// Returns [`PlanError::NoValidGroupFound`] only if `candidates` is empty.
pub fn select_best_group(ant_count: usize, candidates: &[Route]) -> PlanResult<RouteGroup> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&i| candidates[i].len());

    let words = candidates
        .iter()
        .flat_map(|r| r.interior())
        .map(|n| n.index() / 64 + 1)
        .max()
        .unwrap_or(0);
    let masks: Vec<Vec<u64>> = order
        .iter()
        .map(|&i| interior_mask(&candidates[i], words))
        .collect();
    let lens: Vec<usize> = order.iter().map(|&i| candidates[i].len()).collect();

    let mut search = Search {
        ant_count,
        masks:   &masks,
        lens:    &lens,
        used:    vec![0; words],
        current: Vec::new(),
        best:    None,
        visited: 0,
    };
    search.extend(0);

    let visited = search.visited;
    let (cost, picks) = search.best.ok_or(PlanError::NoValidGroupFound)?;
    debug!(
        candidates = candidates.len(),
        groups_visited = visited,
        routes = picks.len(),
        cost,
        "exhaustive group search finished"
    );

    let routes = picks.iter().map(|&pos| candidates[order[pos]].clone()).collect();
    Ok(RouteGroup::new(routes))
}

// ── Search internals ──────────────────────────────────────────────────────────

fn interior_mask(route: &Route, words: usize) -> Vec<u64> {
    let mut mask = vec![0u64; words];
    for node in route.interior() {
        mask[node.index() / 64] |= 1u64 << (node.index() % 64);
    }
    mask
}

/// Depth-first subset search over candidates in length order.
///
/// `current` holds positions into the sorted order, always increasing, so
/// member lengths are non-decreasing.
struct Search<'a> {
    ant_count: usize,
    masks:     &'a [Vec<u64>],
    lens:      &'a [usize],
    /// Union of the interior masks of `current`.
    used:      Vec<u64>,
    current:   Vec<usize>,
    /// `(cost, positions)` of the cheapest group seen so far.
    best:      Option<(usize, Vec<usize>)>,
    visited:   u64,
}

impl Search<'_> {
    fn extend(&mut self, from: usize) {
        for pos in from..self.masks.len() {
            if !self.fits(pos) {
                continue;
            }
            self.toggle(pos);
            self.current.push(pos);
            self.visited += 1;

            let cost = self.cost();
            if self.best.as_ref().is_none_or(|(c, _)| cost < *c) {
                self.best = Some((cost, self.current.clone()));
            }
            if self.current.len() < self.ant_count {
                self.extend(pos + 1);
            }

            self.current.pop();
            self.toggle(pos);
        }
    }

    fn fits(&self, pos: usize) -> bool {
        self.masks[pos]
            .iter()
            .zip(&self.used)
            .all(|(m, u)| m & u == 0)
    }

    /// Add or remove `pos`; members are disjoint, so XOR is exact both ways.
    fn toggle(&mut self, pos: usize) {
        for (u, m) in self.used.iter_mut().zip(&self.masks[pos]) {
            *u ^= m;
        }
    }

    fn cost(&self) -> usize {
        let used = self.ant_count.clamp(1, self.current.len());
        let longest = self.lens[self.current[used - 1]];
        turn_cost(self.ant_count, self.current.len(), longest)
    }
}
