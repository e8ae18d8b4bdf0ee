//! `af-parse`: reader for the ant-farm text format.
//!
//! # Format
//!
//! ```text
//! 4            ← ant count, first line
//! ##start      ← marks the next node line as the start node
//! A 0 0        ← node: name x y
//! B 1 0
//! ##end
//! C 2 0
//! # comment    ← ignored
//! A-B          ← link; the first link ends the node section
//! B-C
//! ```
//!
//! Every line is kept verbatim in [`Colony::input`](af_graph::Colony::input)
//! so it can be echoed before the movement trace.

pub mod error;
pub mod parser;


pub use error::{ParseError, ParseResult};
pub use parser::{parse_path, parse_reader, parse_str};
