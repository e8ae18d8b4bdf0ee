//! Line-oriented colony reader.

use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use af_core::Coord;
use af_graph::{Colony, ColonyGraphBuilder, NodeRole};

use crate::{ParseError, ParseResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Read a colony from a file.
pub fn parse_path(path: &Path) -> ParseResult<Colony> {
    let file = std::fs::File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Read a colony from an in-memory string.
pub fn parse_str(input: &str) -> ParseResult<Colony> {
    parse_reader(input.as_bytes())
}

/// Read a colony from any buffered source.
///
/// The whole input is consumed and validated before anything is returned.
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<Colony> {
    let mut lines = reader.lines();
    let first = match lines.next() {
        None => return Err(ParseError::EmptyInput),
        Some(line) => line?,
    };
    let ant_count = parse_ant_count(&first)?;

    let mut state = ParserState::default();
    let mut input = vec![first];
    for (i, line) in lines.enumerate() {
        let line = line?;
        // Line 1 was the ant count; enumerate starts at 0 on line 2.
        state.feed(i + 2, &line)?;
        input.push(line);
    }

    let graph = state.builder.build()?;
    debug!(
        ants  = ant_count,
        nodes = graph.node_count(),
        links = graph.link_count(),
        "colony parsed"
    );
    Ok(Colony { ant_count, graph, input })
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn parse_ant_count(line: &str) -> ParseResult<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidAntCount(line.to_owned())),
    }
}

#[derive(Default)]
struct ParserState {
    builder:       ColonyGraphBuilder,
    pending_start: bool,
    pending_end:   bool,
    /// Set by the first link; node lines are rejected afterwards.
    in_links:      bool,
}

impl ParserState {
    fn feed(&mut self, line_no: usize, line: &str) -> ParseResult<()> {
        let text = line.trim();
        if text.is_empty() {
            return Ok(());
        }

        if let Some(command) = text.strip_prefix("##") {
            match command {
                "start" => self.pending_start = true,
                "end" => self.pending_end = true,
                other => debug!(line = line_no, command = other, "ignoring unknown command"),
            }
            return Ok(());
        }
        if text.starts_with('#') {
            return Ok(());
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() == 1 && text.contains('-') {
            self.in_links = true;
            return self.link(line_no, text);
        }
        if self.in_links {
            if fields.len() == 3 {
                return Err(ParseError::InvalidNodeFormat {
                    line:   line_no,
                    reason: "node declared after the first link".to_owned(),
                });
            }
            return Err(ParseError::InvalidEdgeFormat { line: line_no, text: text.to_owned() });
        }
        self.node(line_no, &fields)
    }

    fn node(&mut self, line_no: usize, fields: &[&str]) -> ParseResult<()> {
        let invalid = |reason: &str| ParseError::InvalidNodeFormat {
            line:   line_no,
            reason: reason.to_owned(),
        };

        let &[name, x, y] = fields else {
            return Err(invalid("expected `name x y`"));
        };
        if name.starts_with('L') || name.starts_with('#') {
            return Err(invalid("node name may not start with 'L' or '#'"));
        }
        if name.contains('-') {
            return Err(invalid("node name may not contain '-'"));
        }
        let x = x.parse::<i64>().map_err(|_| invalid("invalid x coordinate"))?;
        let y = y.parse::<i64>().map_err(|_| invalid("invalid y coordinate"))?;

        let role = match (self.pending_start, self.pending_end) {
            (true, true) => return Err(invalid("node marked as both start and end")),
            (true, false) => NodeRole::Start,
            (false, true) => NodeRole::End,
            (false, false) => NodeRole::Interior,
        };
        self.builder.add_node(name, Coord::new(x, y), role)?;
        self.pending_start = false;
        self.pending_end = false;
        Ok(())
    }

    fn link(&mut self, line_no: usize, text: &str) -> ParseResult<()> {
        let mut parts = text.split('-');
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseError::InvalidEdgeFormat { line: line_no, text: text.to_owned() });
        };
        if a.is_empty() || b.is_empty() {
            return Err(ParseError::InvalidEdgeFormat { line: line_no, text: text.to_owned() });
        }
        if !self.builder.add_link_by_name(a, b)? {
            warn!(line = line_no, link = text, "ignoring duplicate or self link");
        }
        Ok(())
    }
}
