use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{RawCell, RowNumber, UriId};

/// Error type for loading, normalization, identifier, and persistence failures.
///
/// Every variant is fatal for the run that produced it; absences are never
/// reported through this type.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source table '{}' not found", .path.display())]
    SourceNotFound { path: PathBuf },
    #[error("source table is missing required column '{column}'")]
    SchemaMismatch { column: String },
    #[error("column '{column}' row {row}: unexpected unit in '{value}'")]
    UnexpectedUnit {
        column: String,
        row: RowNumber,
        value: RawCell,
    },
    #[error("column '{column}' row {row}: unexpected format '{value}'")]
    UnexpectedFormat {
        column: String,
        row: RowNumber,
        value: RawCell,
    },
    #[error("column '{column}' row {row}: unknown format '{value}'")]
    UnknownFormat {
        column: String,
        row: RowNumber,
        value: RawCell,
    },
    #[error("column '{column}' row {row}: numeric part of '{value}' does not parse")]
    InvalidNumber {
        column: String,
        row: RowNumber,
        value: RawCell,
    },
    #[error("record {index}: brand and product name produce an empty identifier")]
    MissingIdentity { index: usize },
    #[error("identifier '{id}' derived from both '{first}' and '{second}'")]
    IdentifierCollision {
        id: UriId,
        first: String,
        second: String,
    },
    #[error("link table '{}' is invalid: {reason}", .path.display())]
    LinkTable { path: PathBuf, reason: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PipelineError {
    /// True when the error came from a cell that violated its unit vocabulary.
    pub fn is_data_quality(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedUnit { .. }
                | Self::UnexpectedFormat { .. }
                | Self::UnknownFormat { .. }
                | Self::InvalidNumber { .. }
                | Self::MissingIdentity { .. }
                | Self::IdentifierCollision { .. }
        )
    }
}
