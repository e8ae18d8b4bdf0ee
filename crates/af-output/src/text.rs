//! The lem-in text format.
//!
//! ```text
//! <input line 1>
//! ...
//! <input line n>
//!
//! L1-b
//! L1-e L2-c
//! L2-e
//! ```

use std::io::Write;

use crate::{MoveRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes the echo and the per-step move lines to any `Write`.
///
/// Wrap unbuffered sinks (files, stdout) in a `BufWriter`; one `write!` call
/// is issued per move.
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the sink (e.g. to inspect an in-memory buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_echo(&mut self, lines: &[String]) -> OutputResult<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn write_step(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "L{}-{}", row.ant, row.node)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
