use crate::error::ReportError;
use csv::{ReaderBuilder, StringRecord};
use shared::models::{Cell, Table};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct CsvTableParser;

impl CsvTableParser {
    // Every cell is kept as raw text; conversion happens in the cleaning step.
    // Example header: Produto,Fat. Bruto,% Margem
    // Example row:    Caneta,"1.500,00","15,5%"
    pub fn load_table(file_path: &Path) -> Result<Table, ReportError> {
        let file = File::open(file_path).map_err(|e| ReportError::CsvParseError {
            path: file_path.to_path_buf(),
            source: e.into(),
        })?;
        let table = Self::read_table(BufReader::new(file)).map_err(|e| match e {
            ReportError::CsvDataFormatError(msg) => {
                ReportError::CsvDataFormatError(format!("{}: {}", file_path.display(), msg))
            }
            ReportError::CsvParseError { source, .. } => ReportError::CsvParseError {
                path: file_path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(
            file = %file_path.display(),
            rows = table.row_count(),
            columns = table.width(),
            "Loaded CSV table"
        );
        Ok(table)
    }

    pub fn read_table<R: Read>(reader: R) -> Result<Table, ReportError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true) // Short rows are padded below, long rows rejected
            .from_reader(reader);

        let raw_headers = rdr.headers().map_err(Self::parse_error)?.clone();
        if raw_headers.is_empty() {
            return Err(ReportError::CsvDataFormatError("missing header row".to_string()));
        }
        let headers = Self::unique_headers(&raw_headers);
        let width = headers.len();
        let mut table = Table::new(headers);

        for (idx, result) in rdr.records().enumerate() {
            let record = result.map_err(Self::parse_error)?;
            let line = record.position().map_or(idx as u64 + 2, |p| p.line());

            if record.len() > width {
                return Err(ReportError::CsvDataFormatError(format!(
                    "line {}: expected at most {} fields, found {}",
                    line,
                    width,
                    record.len()
                )));
            }

            let mut row: Vec<Cell> = record.iter().map(Cell::from_field).collect();
            row.resize(width, Cell::Empty);
            table
                .push_row(row)
                .map_err(|e| ReportError::CsvDataFormatError(format!("line {}: {}", line, e)))?;
        }
        Ok(table)
    }

    // Blank headers become "Unnamed: <index>" and repeated headers get a ".N"
    // suffix, so every column keeps a distinct name in the spreadsheet.
    fn unique_headers(raw: &StringRecord) -> Vec<String> {
        let mut seen = HashSet::new();
        raw.iter()
            .enumerate()
            .map(|(idx, header)| {
                let base = if header.trim().is_empty() {
                    format!("Unnamed: {}", idx)
                } else {
                    header.to_string()
                };
                let mut name = base.clone();
                let mut suffix = 1;
                while !seen.insert(name.clone()) {
                    name = format!("{}.{}", base, suffix);
                    suffix += 1;
                }
                name
            })
            .collect()
    }

    // The path is filled in by load_table.
    fn parse_error(source: csv::Error) -> ReportError {
        ReportError::CsvParseError {
            path: Default::default(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ColumnKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_table_keeps_raw_text() {
        let csv_content = "\
Produto,Fat. Bruto,% Margem
Caneta,\"1.500,00\",\"15,5%\"
Caderno,\"12.345,67\",\"8%\"";
        let tmp_file = create_test_csv(csv_content);
        let table = CsvTableParser::load_table(tmp_file.path()).unwrap();

        assert_eq!(table.headers().collect::<Vec<_>>(), vec!["Produto", "Fat. Bruto", "% Margem"]);
        assert_eq!(table.row_count(), 2);
        let first = table.row(0).unwrap();
        assert_eq!(first[0].as_text(), Some("Caneta"));
        assert_eq!(first[1].as_text(), Some("1.500,00"));
        assert_eq!(first[2].as_text(), Some("15,5%"));
    }

    #[test]
    fn test_load_table_header_only() {
        let tmp_file = create_test_csv("Produto,Valor Total");
        let table = CsvTableParser::load_table(tmp_file.path()).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_load_table_empty_file() {
        let tmp_file = NamedTempFile::new().unwrap();
        let result = CsvTableParser::load_table(tmp_file.path());
        match result {
            Err(ReportError::CsvDataFormatError(msg)) => assert!(msg.contains("missing header row")),
            other => panic!("expected CsvDataFormatError, got {:?}", other),
        }
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = CsvTableParser::read_table("A,B,C\n1,,\n2\n".as_bytes()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0).unwrap(), vec![&Cell::Text("1".to_string()), &Cell::Empty, &Cell::Empty]);
        assert_eq!(table.row(1).unwrap(), vec![&Cell::Text("2".to_string()), &Cell::Empty, &Cell::Empty]);
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let tmp_file = create_test_csv("A,B\n1,2\n1,2,3");
        let result = CsvTableParser::load_table(tmp_file.path());
        match result {
            Err(ReportError::CsvDataFormatError(msg)) => {
                assert!(msg.contains("line 3"), "message was: {}", msg);
                assert!(msg.contains("found 3"), "message was: {}", msg);
            }
            other => panic!("expected CsvDataFormatError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Produto,Valor\nCaf\xe9,10\n").unwrap();
        let result = CsvTableParser::load_table(file.path());
        match result {
            Err(ReportError::CsvParseError { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected CsvParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_and_duplicate_headers() {
        let table = CsvTableParser::read_table("Valor,,Valor,Valor\n1,2,3,4\n".as_bytes()).unwrap();
        assert_eq!(
            table.headers().collect::<Vec<_>>(),
            vec!["Valor", "Unnamed: 1", "Valor.1", "Valor.2"]
        );
    }

    #[test]
    fn test_leading_bom_is_stripped_from_first_header() {
        let tmp_file = create_test_csv("\u{feff}Fat. Bruto,B\n\"1.000,00\",x");
        let table = CsvTableParser::load_table(tmp_file.path()).unwrap();

        let headers: Vec<&str> = table.headers().collect();
        assert_eq!(headers, vec!["Fat. Bruto", "B"]);
        assert_eq!(crate::cleaning::classify(headers[0]), ColumnKind::Currency);
        assert_eq!(table.row(0).unwrap()[0].as_text(), Some("1.000,00"));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("vendas.csv");
        assert!(matches!(
            CsvTableParser::load_table(&missing),
            Err(ReportError::CsvParseError { .. })
        ));
    }
}
