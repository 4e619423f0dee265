//! Raw table sources and column projection.
//!
//! Ownership model:
//! - `TableSource` is the loader interface; `load` returns the complete raw
//!   row set or an error, never a partial table.
//! - `projection::project` narrows the raw rows to the configured columns and
//!   renames them to internal fields.

use crate::errors::PipelineError;

/// Projection of raw rows onto internal fields.
pub mod projection;
/// Raw row and table types.
pub mod row_view;
/// Source implementation modules.
pub mod sources;

pub use projection::{ProjectedRecord, project};
pub use row_view::{RawRecord, RawTable, TextField};
pub use sources::csv_file::CsvFileSource;

/// Loader interface producing the full raw row set.
pub trait TableSource: Send + Sync {
    /// Stable source identifier used in logs.
    fn id(&self) -> &str;
    /// Read every row of the source.
    fn load(&self) -> Result<RawTable, PipelineError>;
}

/// In-memory table source for tests and embedding callers.
pub struct InMemorySource {
    id: String,
    table: RawTable,
}

impl InMemorySource {
    /// Create an in-memory source from a prebuilt table.
    pub fn new(id: impl Into<String>, table: RawTable) -> Self {
        Self {
            id: id.into(),
            table,
        }
    }
}

impl TableSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<RawTable, PipelineError> {
        Ok(self.table.clone())
    }
}
