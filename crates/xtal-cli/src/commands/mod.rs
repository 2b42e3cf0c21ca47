pub mod info;
pub mod legend;
pub mod scene;

use crate::error::{CliError, Result};
use std::path::Path;
use tracing::info;
use xtalscene::core::io::json::JsonFile;
use xtalscene::core::io::traits::StructureFile;
use xtalscene::core::models::structure::StructureRecord;

/// Reads a structure record, attaching the path to any failure.
pub(crate) fn load_structure(path: &Path) -> Result<StructureRecord> {
    let record = JsonFile::read_from_path(path).map_err(|source| CliError::StructureRead {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        atoms = record.num_atoms(),
        bonds = record.num_bonds(),
        "Structure record loaded."
    );
    Ok(record)
}
