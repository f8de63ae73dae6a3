use crate::error::ReportError;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use shared::models::{Cell, Table};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub struct XlsxReportWriter;

impl XlsxReportWriter {
    // Bold, thin border, centered: the header look of the legacy Excel export.
    fn header_format() -> Format {
        Format::new()
            .set_bold()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
    }

    /// Renders `table` as a single-sheet workbook: header row first, then one
    /// row per table row. Empty cells are left blank.
    pub fn render(table: &Table) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Self::header_format();

        for (col_idx, column) in table.columns().iter().enumerate() {
            let col = u16::try_from(col_idx).map_err(|_| XlsxError::RowColumnLimitError)?;
            worksheet.write_string_with_format(0, col, &column.name, &header_format)?;

            for (row_idx, cell) in column.cells.iter().enumerate() {
                let row = u32::try_from(row_idx + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(row, col, s)?;
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(row, col, *n)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        workbook.save_to_buffer()
    }

    /// Writes the workbook to `path`. The file only appears once it is complete.
    pub fn write_table(table: &Table, path: &Path) -> Result<(), ReportError> {
        let bytes = Self::render(table).map_err(|source| ReportError::XlsxWriteError {
            path: path.to_path_buf(),
            source,
        })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_error = |source: std::io::Error| ReportError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
        tmp.write_all(&bytes).map_err(write_error)?;
        tmp.as_file().sync_all().map_err(write_error)?;
        tmp.persist(path).map_err(|e| write_error(e.error))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Workbook written");
        Ok(())
    }
}
