//! Persisted outputs: the cleaned table and the graph exchange formats.
//!
//! Every file is written through [`write_atomic`], so a failed write never
//! leaves a truncated output at the target path.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::GraphFormat;
use crate::data::CleanedRecord;
use crate::errors::PipelineError;
use crate::graph::Graph;

mod atomic;
/// N-Triples writer.
pub mod ntriples;
/// Cleaned-table CSV reader and writer.
pub mod table;
/// Turtle writer.
pub mod turtle;

pub use atomic::{temp_path, write_atomic};
pub use ntriples::write_ntriples;
pub use table::{read_cleaned, write_cleaned};
pub use turtle::write_turtle;

/// Write `graph` in `format` to any writer.
pub fn write_graph(
    graph: &Graph,
    format: GraphFormat,
    out: &mut dyn Write,
) -> Result<(), PipelineError> {
    match format {
        GraphFormat::Turtle => write_turtle(graph, out),
        GraphFormat::NTriples => write_ntriples(graph, out),
    }
}

/// Replace the graph file at `path`.
pub fn save_graph(graph: &Graph, format: GraphFormat, path: &Path) -> Result<(), PipelineError> {
    write_atomic(path, |out| write_graph(graph, format, out))?;
    info!(
        "[gpu_graph:serialize] wrote {} statements to {}",
        graph.len(),
        path.display()
    );
    Ok(())
}

/// Replace the cleaned table at `path`.
pub fn save_cleaned(records: &[CleanedRecord], path: &Path) -> Result<(), PipelineError> {
    write_atomic(path, |out| write_cleaned(records, out))?;
    info!(
        "[gpu_graph:serialize] wrote {} cleaned records to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Escape a literal's lexical form for a double-quoted string.
pub(crate) fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
