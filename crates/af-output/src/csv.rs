//! CSV output backend: one `step,ant,node` row per move.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::{MoveRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes the move trace as CSV.  The input echo is not part of this format.
pub struct CsvWriter<W: Write = File> {
    moves:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Self::with_writer(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write CSV to an arbitrary sink.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        Self::with_writer(Writer::from_writer(out))
    }

    fn with_writer(mut moves: Writer<W>) -> OutputResult<Self> {
        moves.write_record(["step", "ant", "node"])?;
        Ok(Self { moves, finished: false })
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_echo(&mut self, _lines: &[String]) -> OutputResult<()> {
        Ok(())
    }

    fn write_step(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        for row in rows {
            self.moves.write_record(&[row.step.to_string(), row.ant.to_string(), row.node.to_owned()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        Ok(())
    }
}
