// Report pipeline: select the latest CSV, clean it, write the dated workbook
use crate::cleaning::{self, ColumnReport};
use crate::config::ReportSettings;
use crate::data::csv_parser::CsvTableParser;
use crate::data::file_selector;
use crate::error::ReportError;
use crate::output::XlsxReportWriter;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub columns: Vec<ColumnReport>,
}

pub struct ReportService {
    settings: ReportSettings,
}

impl ReportService {
    pub fn new(settings: ReportSettings) -> Result<Self, ReportError> {
        settings.validate()?;
        Ok(ReportService { settings })
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Creates the input and output directories if they do not exist yet.
    pub fn prepare_directories(&self) -> Result<(), ReportError> {
        fs::create_dir_all(&self.settings.input_dir)?;
        fs::create_dir_all(&self.settings.output_dir)?;
        Ok(())
    }

    /// Runs the conversion dated with today's local date.
    pub fn run(&self) -> Result<RunSummary, ReportError> {
        self.run_on(Local::now().date_naive())
    }

    pub fn run_on(&self, date: NaiveDate) -> Result<RunSummary, ReportError> {
        self.prepare_directories()?;

        let input = file_selector::latest_csv(&self.settings.input_dir)?;
        let mut table = CsvTableParser::load_table(&input)?;
        let columns = cleaning::clean_table(&mut table);

        let output = self.settings.output_path(date);
        XlsxReportWriter::write_table(&table, &output)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            rows = table.row_count(),
            "Report written"
        );

        Ok(RunSummary {
            input,
            output,
            rows: table.row_count(),
            columns,
        })
    }
}
