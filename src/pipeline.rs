//! Stage orchestration.
//!
//! Stages run strictly in sequence over one materialized record set:
//! load, project, normalize, deduplicate, derive identifiers, then build and
//! serialize the graph. Any fatal error returns before an output file is
//! replaced.

use tracing::info;

use crate::config::PipelineConfig;
use crate::data::CleanedRecord;
use crate::dedup::dedup_records;
use crate::errors::PipelineError;
use crate::graph::{BuildStats, Graph, GraphBuilder};
use crate::ids::assign_identifiers;
use crate::links::LinkTable;
use crate::metrics::RunSummary;
use crate::normalize::normalize_all;
use crate::serialize::{read_cleaned, save_cleaned, save_graph};
use crate::source::{CsvFileSource, TableSource, project};

/// Identified records produced by the cleaning stages, not yet persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Cleaned {
    /// Deduplicated records with identifiers assigned.
    pub records: Vec<CleanedRecord>,
    /// Counts gathered while cleaning.
    pub summary: RunSummary,
}

/// Pipeline bound to one configuration.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline for `config`.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// CSV source reading the configured source path.
    pub fn default_source(&self) -> CsvFileSource {
        CsvFileSource::new(&self.config.source_path)
    }

    /// Run the cleaning stages in memory without writing anything.
    pub fn prepare(&self, source: &dyn TableSource) -> Result<Cleaned, PipelineError> {
        self.config.validate()?;
        let table = source.load()?;
        let mut summary = RunSummary {
            rows_loaded: table.len(),
            ..RunSummary::default()
        };

        let projected = project(&table, &self.config.columns)?;
        let normalized = normalize_all(&projected, &self.config.months)?;
        summary.records_normalized = normalized.len();

        let deduped = dedup_records(normalized);
        summary.duplicates_removed = deduped.removed;

        let identified = assign_identifiers(deduped.records, self.config.collision_policy)?;
        summary.collisions_dropped = identified.collisions_dropped;
        summary.records_cleaned = identified.records.len();

        info!(
            "[gpu_graph:pipeline] cleaned '{}': {} rows -> {} records",
            source.id(),
            summary.rows_loaded,
            summary.records_cleaned
        );
        Ok(Cleaned {
            records: identified.records,
            summary,
        })
    }

    /// Clean `source` and persist the cleaned table.
    pub fn clean(&self, source: &dyn TableSource) -> Result<RunSummary, PipelineError> {
        let Cleaned {
            records,
            mut summary,
        } = self.prepare(source)?;
        save_cleaned(&records, &self.config.cleaned_path)?;
        summary.cleaned_path = Some(self.config.cleaned_path.clone());
        Ok(summary)
    }

    /// Build the in-memory graph for identified records.
    pub fn build_graph(
        &self,
        records: &[CleanedRecord],
        links: &dyn LinkTable,
    ) -> (Graph, BuildStats) {
        GraphBuilder::new(links).build(records)
    }

    /// Read the persisted cleaned table, then build and write the graph.
    pub fn build_graph_from_cleaned(
        &self,
        links: &dyn LinkTable,
    ) -> Result<RunSummary, PipelineError> {
        self.config.validate()?;
        let records = read_cleaned(&self.config.cleaned_path)?;
        let mut summary = RunSummary {
            records_cleaned: records.len(),
            cleaned_path: Some(self.config.cleaned_path.clone()),
            ..RunSummary::default()
        };
        let (graph, stats) = self.build_graph(&records, links);
        save_graph(&graph, self.config.graph_format, &self.config.graph_path)?;
        summary.record_build(&stats);
        summary.graph_path = Some(self.config.graph_path.clone());
        Ok(summary)
    }

    /// Run every stage: clean `source`, persist the cleaned table, then build
    /// and write the graph.
    ///
    /// The graph is built before either file is written.
    pub fn run(
        &self,
        source: &dyn TableSource,
        links: &dyn LinkTable,
    ) -> Result<RunSummary, PipelineError> {
        let Cleaned {
            records,
            mut summary,
        } = self.prepare(source)?;
        let (graph, stats) = self.build_graph(&records, links);

        save_cleaned(&records, &self.config.cleaned_path)?;
        summary.cleaned_path = Some(self.config.cleaned_path.clone());
        save_graph(&graph, self.config.graph_format, &self.config.graph_path)?;
        summary.record_build(&stats);
        summary.graph_path = Some(self.config.graph_path.clone());

        info!(
            "[gpu_graph:pipeline] run complete: {} products, {} statements",
            summary.products, summary.statements
        );
        Ok(summary)
    }
}
