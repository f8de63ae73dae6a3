// Report settings, built once at start-up and passed into the pipeline
use crate::error::ReportError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const DATE_PLACEHOLDER: &str = "{date}";
pub const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// File name of the report; `{date}` is replaced by the run date as YYYYMMDD.
    pub output_file_template: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            input_dir: PathBuf::from("dados"),
            output_dir: PathBuf::from("outputs"),
            output_file_template: "relatorio_{date}.xlsx".to_string(),
        }
    }
}

impl ReportSettings {
    /// Same layout as `default()`, placed under `base`.
    pub fn rooted_at(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let defaults = Self::default();
        ReportSettings {
            input_dir: base.join(defaults.input_dir),
            output_dir: base.join(defaults.output_dir),
            output_file_template: defaults.output_file_template,
        }
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        let template = &self.output_file_template;
        if template.trim().is_empty() {
            return Err(ReportError::ConfigError("output file template is empty".to_string()));
        }
        if !template.contains(DATE_PLACEHOLDER) {
            return Err(ReportError::ConfigError(format!(
                "output file template '{}' has no {} placeholder",
                template, DATE_PLACEHOLDER
            )));
        }
        if !template.ends_with(".xlsx") {
            return Err(ReportError::ConfigError(format!(
                "output file template '{}' must end with .xlsx",
                template
            )));
        }
        if template.contains('/') || template.contains('\\') {
            return Err(ReportError::ConfigError(format!(
                "output file template '{}' must be a plain file name",
                template
            )));
        }
        Ok(())
    }

    pub fn output_file_name(&self, date: NaiveDate) -> String {
        self.output_file_template
            .replace(DATE_PLACEHOLDER, &date.format(DATE_FORMAT).to_string())
    }

    pub fn output_path(&self, date: NaiveDate) -> PathBuf {
        self.output_dir.join(self.output_file_name(date))
    }
}
