//! Simulation observer trait for trace output and progress reporting.

use af_core::{AntId, Step};

use crate::{Move, SimSummary};

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: finish counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl MoveObserver for Arrivals {
///     fn on_ant_finished(&mut self, _ant: AntId, _step: Step) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait MoveObserver {
    /// Called once per emitted step with that step's moves, in trace order.
    fn on_step(&mut self, _step: Step, _moves: &[Move]) {}

    /// Called when an ant enters the end node, after `on_step` for that step.
    fn on_ant_finished(&mut self, _ant: AntId, _step: Step) {}

    /// Called once after the last ant has finished.
    fn on_sim_end(&mut self, _summary: &SimSummary) {}
}

/// A [`MoveObserver`] that does nothing.
pub struct NoopObserver;

impl MoveObserver for NoopObserver {}
