use anyhow::{Context, Result};
use clap::Parser;
use dcoc::{analyze, read_graph6, SearchCfg};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod summary;

use provenance::{write_sidecar, Payload};
use summary::{write_summary, SummaryRow};

const USAGE: &str = "usage: dcoc <file-path>";

#[derive(Parser)]
#[command(name = "dcoc")]
#[command(about = "Search every orientation of graph6 inputs for deeply critical oriented cliques")]
struct Cmd {
    /// File with one graph6 record per line
    input: Option<PathBuf>,

    /// Also search graphs of diameter > 2 (ablation only; they cannot yield cliques)
    #[arg(long)]
    no_diameter_prune: bool,

    /// Refuse graphs with more edges than this
    #[arg(long, default_value_t = dcoc::api::MAX_ORIENTED_EDGES)]
    max_edges: usize,

    /// Write a per-graph summary table (CSV for *.csv, Parquet otherwise)
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Log per-graph diagnostics
    #[arg(short, long)]
    verbose: bool,
}

/// Search parameters as recorded in provenance sidecars.
#[derive(Clone, Copy, Debug, Serialize)]
struct RunParams {
    use_diameter_prune: bool,
    diameter_bound: usize,
    max_edges: usize,
}

impl From<SearchCfg> for RunParams {
    fn from(cfg: SearchCfg) -> Self {
        Self {
            use_diameter_prune: cfg.use_diameter_prune,
            diameter_bound: cfg.diameter_bound,
            max_edges: cfg.max_edges,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if cmd.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let Some(input) = cmd.input.as_deref() else {
        println!("{USAGE}");
        return Ok(());
    };
    let cfg = SearchCfg {
        use_diameter_prune: !cmd.no_diameter_prune,
        max_edges: cmd.max_edges,
        ..SearchCfg::default()
    };

    let stdout = io::stdout();
    let rows = run(input, cfg, &mut stdout.lock())?;

    if let Some(path) = &cmd.summary {
        write_summary(path, &rows)?;
        let payload = Payload::new(
            serde_json::to_value(RunParams::from(cfg))?,
            vec![input.to_string_lossy().into_owned()],
        );
        write_sidecar(path, payload)?;
    }
    Ok(())
}

/// Analyzes every graph in `input`, writing one line per DCOC to `out`.
///
/// Aborts on the first malformed record.
fn run<W: Write>(input: &Path, cfg: SearchCfg, out: &mut W) -> Result<Vec<SummaryRow>> {
    tracing::info!(input = %input.display(), params = ?RunParams::from(cfg), "run");
    let reader = read_graph6(input).with_context(|| format!("opening {}", input.display()))?;

    let mut rows = Vec::new();
    for record in reader {
        let record = record.with_context(|| format!("reading {}", input.display()))?;
        let report = analyze(&record.graph, cfg)
            .with_context(|| format!("line {}: graph {}", record.line, record.text))?;
        tracing::debug!(
            line = record.line,
            graph6 = %record.text,
            vertices = report.vertices,
            edges = report.edges,
            diameter = ?report.diameter,
            skipped = report.skipped,
            cliques = report.stats.oriented_cliques,
            dcocs = report.dcocs.len(),
            "graph"
        );
        for d in &report.dcocs {
            writeln!(out, "{d}")?;
        }
        rows.push(SummaryRow::new(&record, &report));
    }
    out.flush()?;

    tracing::info!(
        graphs = rows.len(),
        skipped = rows.iter().filter(|r| r.skipped).count(),
        dcocs = rows.iter().map(|r| r.dcocs).sum::<usize>(),
        "done"
    );
    Ok(rows)
}
