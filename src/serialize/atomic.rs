use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::paths::TEMP_EXTENSION;
use crate::errors::PipelineError;

/// Sibling temp path `<path>.tmp` used while an output is being written.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(TEMP_EXTENSION);
    PathBuf::from(name)
}

/// Write `path` through a temp file and rename it into place.
///
/// On any error the temp file is removed and `path` is left untouched.
/// Missing parent directories are created.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<(), PipelineError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), PipelineError>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = temp_path(path);
    if let Err(err) = write_temp(&tmp_path, write) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    debug!("[gpu_graph:serialize] replaced {}", path.display());
    Ok(())
}

fn write_temp<F>(tmp_path: &Path, write: F) -> Result<(), PipelineError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), PipelineError>,
{
    let mut writer = BufWriter::new(File::create(tmp_path)?);
    write(&mut writer)?;
    let file = writer.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    Ok(())
}
