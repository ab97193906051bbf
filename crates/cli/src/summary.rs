//! Per-graph summary table (CSV or Parquet) written with polars.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use polars::df;
use polars::prelude::*;
use serde::Serialize;

use dcoc::{Graph6Record, GraphReport};

/// One row per input graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub line: usize,
    pub graph6: String,
    pub vertices: usize,
    pub edges: usize,
    pub diameter: Option<usize>,
    pub skipped: bool,
    pub orientations: u64,
    pub oriented_cliques: u64,
    pub deeply_critical: u64,
    pub dcocs: usize,
}

impl SummaryRow {
    pub fn new(record: &Graph6Record, report: &GraphReport) -> Self {
        Self {
            line: record.line,
            graph6: record.text.clone(),
            vertices: report.vertices,
            edges: report.edges,
            diameter: report.diameter,
            skipped: report.skipped,
            orientations: report.stats.orientations,
            oriented_cliques: report.stats.oriented_cliques,
            deeply_critical: report.stats.deeply_critical,
            dcocs: report.dcocs.len(),
        }
    }
}

fn column<T, F: Fn(&SummaryRow) -> T>(rows: &[SummaryRow], f: F) -> Vec<T> {
    rows.iter().map(f).collect()
}

pub fn to_frame(rows: &[SummaryRow]) -> PolarsResult<DataFrame> {
    df!(
        "line" => column(rows, |r| r.line as u64),
        "graph6" => column(rows, |r| r.graph6.clone()),
        "vertices" => column(rows, |r| r.vertices as u32),
        "edges" => column(rows, |r| r.edges as u32),
        "diameter" => column(rows, |r| r.diameter.map(|d| d as u32)),
        "skipped" => column(rows, |r| r.skipped),
        "orientations" => column(rows, |r| r.orientations),
        "oriented_cliques" => column(rows, |r| r.oriented_cliques),
        "deeply_critical" => column(rows, |r| r.deeply_critical),
        "dcocs" => column(rows, |r| r.dcocs as u32)
    )
}

/// Writes `rows` to `path`: CSV when the extension is `csv`, Parquet otherwise.
pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut df = to_frame(rows)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "csv") {
        CsvWriter::new(file).finish(&mut df)?;
    } else {
        ParquetWriter::new(file).finish(&mut df)?;
    }
    tracing::info!(path = %path.display(), rows = df.height(), "summary_written");
    Ok(())
}
