use std::path::PathBuf;
use thiserror::Error;
use xtalscene::core::io::json::JsonError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read structure '{path}': {source}", path = path.display())]
    StructureRead {
        path: PathBuf,
        #[source]
        source: JsonError,
    },

    #[error("Configuration error in '{path}': {source}", path = path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write scene to '{path}': {source}", path = path.display())]
    SceneWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to export CSV to '{path}': {source}", path = path.display())]
    CsvExport {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
