//! The `Simulator` struct and its step loop.

use std::collections::VecDeque;

use tracing::{info, trace};

use af_core::{NodeId, Step};
use af_graph::{ColonyGraph, Route};

use crate::{Ant, Move, MoveObserver, SimError, SimResult, StepRecord};

/// Totals reported once the colony has been crossed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimSummary {
    /// Last emitted step; `Step::ZERO` only if nothing was ever simulated.
    pub steps:    Step,
    pub finished: usize,
}

/// Synchronous step simulator over one route group.
///
/// Ants are indexed by assignment order, which is also the launch queue
/// order.  Only interior nodes are ever marked occupied: the start holds the
/// waiting ants and the end absorbs any number of arrivals.
///
/// Occupancy is a per-step snapshot.  A node entered during a step is
/// occupied at once; a node left during a step is only released when the
/// step ends, so no ant can enter it in the same step.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator<'a> {
    pub(crate) graph:    &'a ColonyGraph,
    pub(crate) routes:   &'a [Route],
    pub(crate) ants:     Vec<Ant>,
    /// Ants still in the start node, front launches first.
    pub(crate) waiting:  VecDeque<usize>,
    /// Ants on an interior node, in launch order.
    pub(crate) moving:   Vec<usize>,
    pub(crate) occupied: Vec<bool>,
    pub(crate) step:     Step,
    pub(crate) finished: usize,
}

impl<'a> Simulator<'a> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every ant has reached the end node.
    pub fn run<O: MoveObserver>(&mut self, observer: &mut O) -> SimResult<SimSummary> {
        let end = self.graph.end;
        while let Some(record) = self.step()? {
            observer.on_step(record.step, &record.moves);
            for m in record.moves.iter().filter(|m| m.to == end) {
                observer.on_ant_finished(m.ant, record.step);
            }
        }

        let summary = self.summary();
        info!(steps = summary.steps.0, ants = summary.finished, "simulation finished");
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Advance one step.
    ///
    /// Returns `Ok(None)` once every ant has finished.  A step in which no
    /// ant can move while some remain is reported as [`SimError::Stalled`].
    pub fn step(&mut self) -> SimResult<Option<StepRecord>> {
        if self.is_done() {
            return Ok(None);
        }

        let step = self.step.next();
        let mut moves = Vec::new();
        let vacated = self.advance(&mut moves);
        self.launch(&mut moves);
        for node in vacated {
            self.occupied[node.index()] = false;
        }

        if moves.is_empty() {
            return Err(SimError::Stalled { step, remaining: self.ants.len() - self.finished });
        }
        self.step = step;
        trace!(step = step.0, moves = moves.len(), waiting = self.waiting.len(), "step");
        Ok(Some(StepRecord { step, moves }))
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.waiting.is_empty() && self.moving.is_empty()
    }

    /// Last completed step.
    #[inline]
    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn graph(&self) -> &'a ColonyGraph {
        self.graph
    }

    pub fn summary(&self) -> SimSummary {
        SimSummary { steps: self.step, finished: self.finished }
    }

    // ── Step phases ───────────────────────────────────────────────────────

    /// Move every ant that can.  Returns the interior nodes left behind,
    /// which stay occupied until the launch phase is over.
    fn advance(&mut self, moves: &mut Vec<Move>) -> Vec<NodeId> {
        let end = self.graph.end;
        let mut vacated = Vec::new();
        for &i in &self.moving {
            let ant = &mut self.ants[i];
            let nodes = self.routes[ant.route].nodes();
            let here = nodes[ant.progress];
            let next = nodes[ant.progress + 1];
            if !self.graph.is_terminal(next) && self.occupied[next.index()] {
                continue;
            }

            vacated.push(here);
            ant.progress += 1;
            if next == end {
                ant.finished = true;
                self.finished += 1;
            } else {
                self.occupied[next.index()] = true;
            }
            moves.push(Move { ant: ant.id, to: next });
        }
        self.moving.retain(|&i| !self.ants[i].finished);
        vacated
    }

    fn launch(&mut self, moves: &mut Vec<Move>) {
        let end = self.graph.end;
        while let Some(&i) = self.waiting.front() {
            let ant = &mut self.ants[i];
            let first = self.routes[ant.route].first_hop();
            if !self.graph.is_terminal(first) && self.occupied[first.index()] {
                break;
            }

            self.waiting.pop_front();
            ant.progress = 1;
            if first == end {
                ant.finished = true;
                self.finished += 1;
            } else {
                self.occupied[first.index()] = true;
                self.moving.push(i);
            }
            moves.push(Move { ant: ant.id, to: first });
        }
    }
}
