//! `TraceObserver<W>`: bridges `MoveObserver` to an `OutputWriter`.

use af_core::Step;
use af_graph::ColonyGraph;
use af_sim::{Move, MoveObserver, SimSummary};

use crate::row::MoveRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`MoveObserver`] that resolves node names and forwards every step to
/// an [`OutputWriter`].
///
/// Observer callbacks cannot fail, so the first writer error is kept and
/// later writes are skipped.  Check [`take_error`][Self::take_error] after
/// `sim.run()` returns.
pub struct TraceObserver<'g, W: OutputWriter> {
    graph:      &'g ColonyGraph,
    writer:     W,
    last_error: Option<OutputError>,
}

impl<'g, W: OutputWriter> TraceObserver<'g, W> {
    pub fn new(graph: &'g ColonyGraph, writer: W) -> Self {
        Self { graph, writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> MoveObserver for TraceObserver<'_, W> {
    fn on_step(&mut self, step: Step, moves: &[Move]) {
        if self.last_error.is_some() {
            return;
        }
        let graph = self.graph;
        let rows: Vec<MoveRow<'_>> = moves
            .iter()
            .map(|m| MoveRow { step: step.0, ant: m.ant.0, node: graph.name(m.to) })
            .collect();
        let result = self.writer.write_step(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &SimSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
