// Services orchestrating a conversion run
pub mod report_service;

pub use report_service::{ReportService, RunSummary};
