use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::data::CleanedRecord;
use crate::errors::PipelineError;

/// Write records as the cleaned CSV table, header row first.
pub fn write_cleaned(records: &[CleanedRecord], out: &mut dyn Write) -> Result<(), PipelineError> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a cleaned table written by [`write_cleaned`].
///
/// Every row must carry a product identifier; a table without one has not
/// been through identifier derivation.
pub fn read_cleaned(path: &Path) -> Result<Vec<CleanedRecord>, PipelineError> {
    if !path.is_file() {
        return Err(PipelineError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<CleanedRecord>().enumerate() {
        let record = row?;
        if record.product_uri_id.is_empty() {
            return Err(PipelineError::MissingIdentity { index: idx + 1 });
        }
        records.push(record);
    }
    info!(
        "[gpu_graph:serialize] read {} cleaned records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
