//! `af-output`: trace writers for the ant-farm route planner.
//!
//! | Writer         | Format                                                   |
//! |----------------|----------------------------------------------------------|
//! | [`TextWriter`] | Input echo, blank line, then one `L<ant>-<node>` line per step |
//! | [`CsvWriter`]  | `step,ant,node` rows, one per move                       |
//!
//! Both implement [`OutputWriter`] and are driven by [`TraceObserver`], which
//! implements `af_sim::MoveObserver`.  A pair `(A, B)` of writers and an
//! `Option<W>` are writers too, so optional extra outputs compose without
//! boxing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use af_output::{OutputWriter, TextWriter, TraceObserver};
//!
//! let mut writer = TextWriter::new(std::io::stdout().lock());
//! writer.write_echo(&colony.input)?;
//! let mut obs = TraceObserver::new(&colony.graph, writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::MoveRow;
pub use text::TextWriter;
pub use writer::OutputWriter;
