use std::path::PathBuf;

use crate::graph::BuildStats;

/// Counts and outputs of one pipeline invocation.
///
/// Stages a run did not execute keep their counts at zero and their paths
/// at `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Raw rows read from the source table.
    pub rows_loaded: usize,
    /// Rows that passed normalization.
    pub records_normalized: usize,
    /// Exact duplicates removed.
    pub duplicates_removed: usize,
    /// Records dropped by the keep-first collision policy.
    pub collisions_dropped: usize,
    /// Records in the cleaned table.
    pub records_cleaned: usize,
    /// Product entities in the graph.
    pub products: usize,
    /// Organization entities in the graph.
    pub brands: usize,
    /// Architecture entities in the graph.
    pub architectures: usize,
    /// Statements in the graph.
    pub statements: usize,
    /// Cleaned table written or read by this run.
    pub cleaned_path: Option<PathBuf>,
    /// Graph file written by this run.
    pub graph_path: Option<PathBuf>,
}

impl RunSummary {
    /// Fold graph build counts into the summary.
    pub fn record_build(&mut self, stats: &BuildStats) {
        self.products = stats.products;
        self.brands = stats.brands;
        self.architectures = stats.architectures;
        self.statements = stats.statements;
    }

    /// Human-readable report, one `label: value` line per populated entry.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.rows_loaded > 0 {
            lines.push(format!("rows loaded: {}", format_count(self.rows_loaded)));
            lines.push(format!(
                "records normalized: {}",
                format_count(self.records_normalized)
            ));
            lines.push(format!(
                "duplicates removed: {}",
                format_count(self.duplicates_removed)
            ));
            if self.collisions_dropped > 0 {
                lines.push(format!(
                    "collisions dropped: {}",
                    format_count(self.collisions_dropped)
                ));
            }
        }
        lines.push(format!("cleaned records: {}", format_count(self.records_cleaned)));
        if let Some(path) = &self.cleaned_path {
            lines.push(format!("cleaned table: {}", path.display()));
        }
        if let Some(path) = &self.graph_path {
            lines.push(format!(
                "graph: {} statements ({} products, {} brands, {} architectures)",
                format_count(self.statements),
                format_count(self.products),
                format_count(self.brands),
                format_count(self.architectures)
            ));
            lines.push(format!("graph file: {}", path.display()));
        }
        lines
    }
}

/// Format a count with thousands separators (`1234567` -> `1,234,567`).
pub fn format_count(value: usize) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(',');
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(2_831_104), "2,831,104");
    }

    #[test]
    fn report_skips_stages_that_did_not_run() {
        let graph_only = RunSummary {
            records_cleaned: 2,
            products: 2,
            brands: 1,
            statements: 120,
            cleaned_path: Some(PathBuf::from("data/gpu_info_cleaned.csv")),
            graph_path: Some(PathBuf::from("data/gpu_data.ttl")),
            ..RunSummary::default()
        };
        let lines = graph_only.report_lines();
        assert!(!lines.iter().any(|line| line.starts_with("rows loaded")));
        assert!(lines.contains(&"graph file: data/gpu_data.ttl".to_string()));
        assert!(lines.contains(
            &"graph: 120 statements (2 products, 1 brands, 0 architectures)".to_string()
        ));
    }

    #[test]
    fn record_build_copies_counts() {
        let mut summary = RunSummary::default();
        summary.record_build(&BuildStats {
            products: 3,
            brands: 2,
            architectures: 1,
            statements: 99,
        });
        assert_eq!(summary.products, 3);
        assert_eq!(summary.statements, 99);
        assert!(summary.report_lines().iter().any(|l| l == "cleaned records: 0"));
    }
}
