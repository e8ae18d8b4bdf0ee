//! lem-in: read a colony description, pick the routes, print the crossing.
//!
//! ```text
//! lem-in <input-file>
//! ```
//!
//! Standard output receives the input echo, a blank line, and one line of
//! `L<ant>-<node>` moves per step.  Nothing is printed to stdout if the
//! colony cannot be read or has no route.
//!
//! # Environment
//!
//! | Variable        | Effect                                                  |
//! |-----------------|---------------------------------------------------------|
//! | `LEM_IN_CONFIG` | JSON file overriding `SolverConfig` fields              |
//! | `LEM_IN_CSV`    | Also write the moves as `step,ant,node` CSV to this path |
//! | `RUST_LOG`      | Log filter for stderr diagnostics (default `warn`)      |

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use af_core::SolverConfig;
use af_output::{CsvWriter, OutputWriter, TextWriter, TraceObserver};
use af_parse::parse_path;
use af_plan::Planner;
use af_sim::SimBuilder;

const CONFIG_ENV: &str = "LEM_IN_CONFIG";
const CSV_ENV:    &str = "LEM_IN_CSV";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args_os().skip(1);
    let (Some(input), None) = (args.next(), args.next()) else {
        bail!("usage: lem-in <input-file>");
    };
    let input = PathBuf::from(input);

    let config = load_config()?;
    let colony = parse_path(&input)
        .with_context(|| format!("invalid data format in {}", input.display()))?;
    let planner = Planner::new(config)?;
    info!(
        nodes     = colony.graph.node_count(),
        threshold = planner.config().large_graph_threshold,
        strategy  = %planner.strategy_for(&colony.graph),
        "colony loaded"
    );
    let plan = planner.plan(&colony)?;
    info!(
        ants   = colony.ant_count,
        routes = plan.group.len(),
        turns  = plan.turns,
        "planned"
    );

    let stdout = TextWriter::new(BufWriter::new(io::stdout().lock()));
    let csv = match std::env::var_os(CSV_ENV) {
        Some(path) => Some(
            CsvWriter::new(Path::new(&path))
                .with_context(|| format!("creating {}", Path::new(&path).display()))?,
        ),
        None => None,
    };
    let mut writer = (stdout, csv);
    writer.write_echo(&colony.input)?;

    let mut observer = TraceObserver::new(&colony.graph, writer);
    let summary = SimBuilder::new(&colony.graph, &plan.group, colony.ant_count)
        .build()?
        .run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing trace");
    }
    info!(steps = summary.steps.0, "done");
    Ok(())
}

fn load_config() -> Result<SolverConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            SolverConfig::from_json_path(&path)
                .with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(SolverConfig::default()),
    }
}
