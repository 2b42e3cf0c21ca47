use crate::core::io::traits::StructureFile;
use crate::core::models::structure::StructureRecord;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed structure record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The JSON structure record format produced by the parsing backend.
///
/// One document per file, matching the upload endpoint's response shape:
/// `atoms`, `bonds`, `lattice_parameters`, and the descriptive metadata
/// fields. Unknown keys are ignored so records from newer producers still
/// load.
pub struct JsonFile;

impl StructureFile for JsonFile {
    type Error = JsonError;

    fn read_from(reader: &mut impl BufRead) -> Result<StructureRecord, Self::Error> {
        let record = serde_json::from_reader(reader)?;
        Ok(record)
    }

    fn write_to(record: &StructureRecord, writer: &mut impl Write) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut *writer, record)?;
        writeln!(writer)?;
        Ok(())
    }
}
