use std::path::{Path, PathBuf};

use crate::constants::columns;
use crate::constants::paths::{
    DEFAULT_CLEANED_FILENAME, DEFAULT_DATA_DIR, DEFAULT_GRAPH_FILENAME, DEFAULT_SOURCE_FILENAME,
};
use crate::data::Field;
use crate::errors::PipelineError;
use crate::types::ColumnName;

/// Maps one raw source column onto an internal field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Header in the raw source table.
    pub source: ColumnName,
    /// Internal field the column is renamed to.
    pub field: Field,
}

impl ColumnMapping {
    /// Create a mapping from a source header to a field.
    pub fn new(source: impl Into<ColumnName>, field: Field) -> Self {
        Self {
            source: source.into(),
            field,
        }
    }

    /// The fixed column set of the spec-sheet export, in projection order.
    pub fn default_set() -> Vec<ColumnMapping> {
        vec![
            ColumnMapping::new(columns::BRAND, Field::Brand),
            ColumnMapping::new(columns::NAME, Field::ProductName),
            ColumnMapping::new(columns::RELEASE_DATE, Field::ReleaseDate),
            ColumnMapping::new(columns::GPU_NAME, Field::GpuName),
            ColumnMapping::new(columns::CODENAME, Field::GpuCodename),
            ColumnMapping::new(columns::ARCHITECTURE, Field::Architecture),
            ColumnMapping::new(columns::SHADING_UNITS, Field::ShadingUnits),
            ColumnMapping::new(columns::BASE_CLOCK, Field::BaseClock),
            ColumnMapping::new(columns::BOOST_CLOCK, Field::BoostClock),
            ColumnMapping::new(columns::MEMORY_SIZE, Field::MemSize),
            ColumnMapping::new(columns::MEMORY_TYPE, Field::MemType),
            ColumnMapping::new(columns::MEMORY_BUS, Field::MemBus),
            ColumnMapping::new(columns::BANDWIDTH, Field::Bandwidth),
            ColumnMapping::new(columns::FP32, Field::Fp32),
            ColumnMapping::new(columns::TDP, Field::Tdp),
            ColumnMapping::new(columns::LAUNCH_PRICE, Field::LaunchPrice),
        ]
    }
}

/// Lookup from three-letter month abbreviation to month number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthTable {
    entries: Vec<(String, u32)>,
}

impl MonthTable {
    /// Build a table from `(abbreviation, month)` pairs; matching is case-insensitive.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, month)| (name.as_ref().to_ascii_lowercase(), month))
                .collect(),
        }
    }

    /// Month number for a three-letter abbreviation, if known.
    pub fn lookup(&self, abbreviation: &str) -> Option<u32> {
        let needle = abbreviation.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == needle)
            .map(|(_, month)| *month)
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        Self::new([
            ("Jan", 1),
            ("Feb", 2),
            ("Mar", 3),
            ("Apr", 4),
            ("May", 5),
            ("Jun", 6),
            ("Jul", 7),
            ("Aug", 8),
            ("Sep", 9),
            ("Oct", 10),
            ("Nov", 11),
            ("Dec", 12),
        ])
    }
}

/// What to do when two records derive the same product identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Abort the run with `PipelineError::IdentifierCollision`.
    #[default]
    Fail,
    /// Keep the first record and drop later ones with a warning.
    KeepFirst,
}

/// Exchange format for the persisted graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphFormat {
    /// Turtle with prefix declarations and subject grouping.
    #[default]
    Turtle,
    /// One statement per line, full IRIs.
    NTriples,
}

/// All run parameters of a pipeline invocation.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Raw spec-sheet table.
    pub source_path: PathBuf,
    /// Cleaned intermediate table written after normalization.
    pub cleaned_path: PathBuf,
    /// Graph output file.
    pub graph_path: PathBuf,
    /// Graph output format.
    pub graph_format: GraphFormat,
    /// Ordered source-column to field mapping.
    pub columns: Vec<ColumnMapping>,
    /// Month abbreviations used by the date normalizer.
    pub months: MonthTable,
    /// Behavior on product identifier collisions.
    pub collision_policy: CollisionPolicy,
}

impl PipelineConfig {
    /// Default layout rooted at `dir` instead of `data/`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            source_path: dir.join(DEFAULT_SOURCE_FILENAME),
            cleaned_path: dir.join(DEFAULT_CLEANED_FILENAME),
            graph_path: dir.join(DEFAULT_GRAPH_FILENAME),
            graph_format: GraphFormat::default(),
            columns: ColumnMapping::default_set(),
            months: MonthTable::default(),
            collision_policy: CollisionPolicy::default(),
        }
    }

    /// Override the raw source path.
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Override the cleaned table path.
    pub fn with_cleaned_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cleaned_path = path.into();
        self
    }

    /// Override the graph output path.
    pub fn with_graph_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.graph_path = path.into();
        self
    }

    /// Override the graph output format.
    pub fn with_graph_format(mut self, format: GraphFormat) -> Self {
        self.graph_format = format;
        self
    }

    /// Replace the column mapping.
    pub fn with_columns(mut self, columns: Vec<ColumnMapping>) -> Self {
        self.columns = columns;
        self
    }

    /// Replace the month table.
    pub fn with_months(mut self, months: MonthTable) -> Self {
        self.months = months;
        self
    }

    /// Override the collision policy.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}

impl PipelineConfig {
    /// Reject configurations that would map a field twice or make one stage
    /// overwrite another stage's file.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.columns.is_empty() {
            return Err(PipelineError::Configuration(
                "column mapping is empty".to_string(),
            ));
        }
        for (idx, mapping) in self.columns.iter().enumerate() {
            if self.columns[..idx].iter().any(|m| m.field == mapping.field) {
                return Err(PipelineError::Configuration(format!(
                    "field '{}' is mapped more than once",
                    mapping.field
                )));
            }
        }
        let paths = [
            ("source", &self.source_path),
            ("cleaned", &self.cleaned_path),
            ("graph", &self.graph_path),
        ];
        for (idx, (name, path)) in paths.iter().enumerate() {
            if let Some((other, _)) = paths[idx + 1..].iter().find(|(_, p)| p == path) {
                return Err(PipelineError::Configuration(format!(
                    "{name} and {other} paths are both '{}'",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_cover_every_field_once() {
        let mapping = ColumnMapping::default_set();
        assert_eq!(mapping.len(), Field::ALL.len());
        for field in Field::ALL {
            assert_eq!(mapping.iter().filter(|m| m.field == field).count(), 1);
        }
    }

    #[test]
    fn month_lookup_is_case_insensitive() {
        let months = MonthTable::default();
        assert_eq!(months.lookup("Sep"), Some(9));
        assert_eq!(months.lookup("sep"), Some(9));
        assert_eq!(months.lookup("DEC"), Some(12));
        assert_eq!(months.lookup("Sept"), None);
    }

    #[test]
    fn in_dir_rebases_all_paths() {
        let config = PipelineConfig::in_dir("/tmp/gpu");
        assert_eq!(
            config.source_path,
            PathBuf::from("/tmp/gpu").join(DEFAULT_SOURCE_FILENAME)
        );
        assert!(config.cleaned_path.starts_with("/tmp/gpu"));
        assert!(config.graph_path.starts_with("/tmp/gpu"));
        assert_eq!(config.collision_policy, CollisionPolicy::Fail);
    }

    #[test]
    fn validate_rejects_overlapping_paths_and_duplicate_fields() {
        assert!(PipelineConfig::default().validate().is_ok());

        let same = PipelineConfig::in_dir("/tmp/gpu")
            .with_graph_path(Path::new("/tmp/gpu").join(DEFAULT_CLEANED_FILENAME));
        match same.validate() {
            Err(PipelineError::Configuration(message)) => {
                assert!(message.starts_with("cleaned and graph"), "{message}");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }

        let mut columns = ColumnMapping::default_set();
        columns.push(ColumnMapping::new("TDP (again)", Field::Tdp));
        assert!(
            PipelineConfig::default()
                .with_columns(columns)
                .validate()
                .is_err()
        );
        assert!(
            PipelineConfig::default()
                .with_columns(Vec::new())
                .validate()
                .is_err()
        );
    }
}
