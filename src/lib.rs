#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runner used by the `gpu_graph` binary.
pub mod cli;
/// Pipeline configuration types.
pub mod config;
/// Centralized constants: source columns, unit tokens, namespaces and paths.
pub mod constants;
/// Internal field names and the cleaned record type.
pub mod data;
/// Exact-duplicate removal.
pub mod dedup;
/// In-memory statement graph and its builder.
pub mod graph;
/// Slug identifiers.
pub mod ids;
/// External same-as link tables.
pub mod links;
/// Run summary reporting.
pub mod metrics;
/// Per-field normalization of projected rows.
pub mod normalize;
/// Stage orchestration.
pub mod pipeline;
/// Cleaned-table and graph writers.
pub mod serialize;
/// Table sources and column projection.
pub mod source;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{CollisionPolicy, ColumnMapping, GraphFormat, MonthTable, PipelineConfig};
pub use data::{CleanedRecord, Field};
pub use errors::PipelineError;
pub use graph::{BuildStats, Graph, GraphBuilder, Literal, Statement, Term};
pub use links::{LinkTable, StaticLinkTable};
pub use metrics::RunSummary;
pub use pipeline::{Cleaned, Pipeline};
pub use source::{CsvFileSource, InMemorySource, RawTable, TableSource};
pub use types::{ColumnName, DedupKey, Iri, RawCell, RowNumber, UriId};
