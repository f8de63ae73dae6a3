// Converter library root
// Latest CSV in, cleaned dated workbook out.

pub mod cleaning;
pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod services;

pub use config::ReportSettings;
pub use error::ReportError;
pub use services::{ReportService, RunSummary};
