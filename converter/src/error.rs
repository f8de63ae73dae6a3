use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No CSV file found in {}", dir.display())]
    NoInputFound { dir: PathBuf },

    #[error("CSV parsing error in {}: {source}", path.display())]
    CsvParseError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Spreadsheet rendering error for {}: {source}", path.display())]
    XlsxWriteError {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn is_write_failure(&self) -> bool {
        matches!(self, ReportError::XlsxWriteError { .. } | ReportError::WriteError { .. })
    }
}
