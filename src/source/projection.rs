use indexmap::IndexMap;

use super::row_view::RawTable;
use crate::config::ColumnMapping;
use crate::data::Field;
use crate::errors::PipelineError;
use crate::types::{RawCell, RowNumber};

/// A raw row reduced to the mapped columns under their internal names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectedRecord {
    /// One-based data row number in the source table.
    pub row: RowNumber,
    /// Cells keyed by internal field, in mapping order.
    pub cells: IndexMap<Field, RawCell>,
}

impl ProjectedRecord {
    /// Cell text for `field`; empty when the field was not mapped.
    pub fn cell(&self, field: Field) -> &str {
        self.cells.get(&field).map(String::as_str).unwrap_or("")
    }
}

/// Select and rename the mapped columns of every row, preserving row order.
///
/// Columns not named in `mapping` are dropped. A mapped column missing from
/// the table header fails with `SchemaMismatch`.
pub fn project(
    table: &RawTable,
    mapping: &[ColumnMapping],
) -> Result<Vec<ProjectedRecord>, PipelineError> {
    if let Some(missing) = mapping.iter().find(|m| !table.has_column(&m.source)) {
        return Err(PipelineError::SchemaMismatch {
            column: missing.source.clone(),
        });
    }

    Ok(table
        .rows
        .iter()
        .map(|raw| ProjectedRecord {
            row: raw.row,
            cells: mapping
                .iter()
                .map(|m| (m.field, raw.get(&m.source).unwrap_or("").to_string()))
                .collect(),
        })
        .collect())
}
