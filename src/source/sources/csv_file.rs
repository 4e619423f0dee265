use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::errors::PipelineError;
use crate::source::TableSource;
use crate::source::row_view::{RawRecord, RawTable, TextField};

/// Loads a header-first CSV file into a `RawTable`.
#[derive(Clone, Debug)]
pub struct CsvFileSource {
    id: String,
    path: PathBuf,
    delimiter: u8,
}

impl CsvFileSource {
    /// Create a source reading the comma-separated file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("csv")
            .to_string();
        Self {
            id,
            path,
            delimiter: b',',
        }
    }

    /// Override the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for CsvFileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<RawTable, PipelineError> {
        if !self.path.is_file() {
            return Err(PipelineError::SourceNotFound {
                path: self.path.clone(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_path(&self.path)?;

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                if idx == 0 {
                    header.trim_start_matches('\u{feff}').to_string()
                } else {
                    header.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|err| {
                if matches!(err.kind(), csv::ErrorKind::Utf8 { .. }) {
                    PipelineError::Encoding(format!(
                        "{} row {}: {err}",
                        self.path.display(),
                        idx + 1
                    ))
                } else {
                    err.into()
                }
            })?;
            let text_fields = headers
                .iter()
                .enumerate()
                .map(|(col, name)| TextField::new(name.clone(), record.get(col).unwrap_or("")))
                .collect();
            rows.push(RawRecord {
                row: idx + 1,
                text_fields,
            });
        }

        info!(
            "[gpu_graph:source] loaded {} rows x {} columns from {}",
            rows.len(),
            headers.len(),
            self.path.display()
        );
        Ok(RawTable { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_reads_headers_and_rows_in_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("gpus.csv");
        fs::write(
            &path,
            "\u{feff}Brand,Name,Board Design__TDP\nNVIDIA,\"GeForce RTX 4090\",450 W\nAMD,Radeon RX 7900 XTX\n",
        )
        .unwrap();

        let table = CsvFileSource::new(&path).load().unwrap();
        assert_eq!(table.headers, vec!["Brand", "Name", "Board Design__TDP"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("Name"), Some("GeForce RTX 4090"));
        assert_eq!(table.rows[0].get("Board Design__TDP"), Some("450 W"));
        assert_eq!(table.rows[1].get("Board Design__TDP"), Some(""));
        assert_eq!(table.rows[1].row, 2);
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("absent.csv");
        match CsvFileSource::new(&path).load() {
            Err(PipelineError::SourceNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_row_is_an_encoding_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("latin1.csv");
        fs::write(&path, b"Brand,Name\nMatrox,Parh\xe9lia\n").unwrap();
        match CsvFileSource::new(&path).load() {
            Err(PipelineError::Encoding(message)) => assert!(message.contains("row 1")),
            other => panic!("expected Encoding, got {other:?}"),
        }
    }

    #[test]
    fn custom_delimiter_splits_fields() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("gpus.csv");
        fs::write(&path, "Brand;Name;Memory__Memory Size\nATI;Radeon 9700 Pro, AGP;128 MB\n")
            .unwrap();

        let table = CsvFileSource::new(&path).with_delimiter(b';').load().unwrap();
        assert_eq!(table.headers, vec!["Brand", "Name", "Memory__Memory Size"]);
        assert_eq!(table.rows[0].get("Name"), Some("Radeon 9700 Pro, AGP"));
        assert_eq!(table.rows[0].get("Memory__Memory Size"), Some("128 MB"));
    }

    #[test]
    fn source_id_is_file_stem() {
        let source = CsvFileSource::new("data/gpu_1986-2026.csv");
        assert_eq!(source.id(), "gpu_1986-2026");
        assert_eq!(source.path(), Path::new("data/gpu_1986-2026.csv"));
    }
}
