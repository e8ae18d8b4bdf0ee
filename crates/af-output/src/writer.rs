//! The `OutputWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// Errors raised while a simulation is running are stored by
/// [`TraceObserver`][crate::TraceObserver] and retrieved with
/// [`take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write the original input lines.  Backends without an echo section
    /// ignore this.
    fn write_echo(&mut self, lines: &[String]) -> OutputResult<()>;

    /// Write every move of one step.  `rows` is never empty and all rows
    /// share the same `step`.
    fn write_step(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Writes to both members, first `A` then `B`.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_echo(&mut self, lines: &[String]) -> OutputResult<()> {
        self.0.write_echo(lines)?;
        self.1.write_echo(lines)
    }

    fn write_step(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        self.0.write_step(rows)?;
        self.1.write_step(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// `None` discards everything.
impl<W: OutputWriter> OutputWriter for Option<W> {
    fn write_echo(&mut self, lines: &[String]) -> OutputResult<()> {
        match self {
            Some(w) => w.write_echo(lines),
            None => Ok(()),
        }
    }

    fn write_step(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        match self {
            Some(w) => w.write_step(rows),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None => Ok(()),
        }
    }
}
