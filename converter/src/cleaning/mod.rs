// Column cleaning: header classification and locale number conversion
pub mod currency;
pub mod percentage;

use currency::CurrencyCleaner;
use percentage::PercentageCleaner;
use shared::models::{Cell, Column, ColumnKind, Table};
use shared::utils::brazilian_format::{normalize, Normalized};

/// Header substrings that mark a monetary column.
pub const CURRENCY_MARKERS: [&str; 2] = ["Fat.", "Valor"];
pub const PERCENTAGE_MARKER: char = '%';

// Common trait for the numeric column cleaners
pub trait ColumnCleaner: Send + Sync {
    fn kind(&self) -> ColumnKind;
    /// Maps a normalized cell value to the value stored in the sheet.
    fn scale(&self, value: f64) -> f64;
}

/// Which marker rules a header matches. Both can be true at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMarkers {
    pub currency: bool,
    pub percentage: bool,
}

impl ColumnMarkers {
    pub fn detect(header: &str) -> Self {
        ColumnMarkers {
            currency: CURRENCY_MARKERS.iter().any(|m| header.contains(m)),
            percentage: header.contains(PERCENTAGE_MARKER),
        }
    }

    pub fn overlaps(&self) -> bool {
        self.currency && self.percentage
    }

    // Percentage wins over currency so an overlapping column is cleaned once.
    pub fn kind(&self) -> ColumnKind {
        if self.percentage {
            ColumnKind::Percentage
        } else if self.currency {
            ColumnKind::Currency
        } else {
            ColumnKind::Text
        }
    }
}

pub fn classify(header: &str) -> ColumnKind {
    ColumnMarkers::detect(header).kind()
}

pub fn cleaner_for(kind: ColumnKind) -> Option<Box<dyn ColumnCleaner>> {
    match kind {
        ColumnKind::Currency => Some(Box::new(CurrencyCleaner)),
        ColumnKind::Percentage => Some(Box::new(PercentageCleaner)),
        ColumnKind::Text => None,
    }
}

/// Per-column outcome of the cleaning step.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnReport {
    pub name: String,
    pub kind: ColumnKind,
    pub blank: usize,
    pub unparseable: usize,
}

/// Classifies `column` by its header and converts its cells in place.
///
/// Text cells and empty cells become numbers; cells that are already numbers
/// are left alone. Text columns are not touched.
pub fn classify_and_clean(column: &mut Column) -> ColumnReport {
    let Some(cleaner) = cleaner_for(classify(&column.name)) else {
        return ColumnReport {
            name: column.name.clone(),
            kind: ColumnKind::Text,
            blank: 0,
            unparseable: 0,
        };
    };
    let mut report = ColumnReport {
        name: column.name.clone(),
        kind: cleaner.kind(),
        blank: 0,
        unparseable: 0,
    };

    for cell in column.cells.iter_mut() {
        let normalized = match cell {
            Cell::Text(raw) => normalize(Some(raw.as_str())),
            Cell::Empty => normalize(None),
            Cell::Number(_) => continue,
        };
        match &normalized {
            Normalized::Blank => report.blank += 1,
            Normalized::Unparseable(_) => report.unparseable += 1,
            Normalized::Value(_) => {}
        }
        *cell = Cell::Number(cleaner.scale(normalized.value()));
    }
    report
}

/// Cleans every column of `table` and returns one report per column.
pub fn clean_table(table: &mut Table) -> Vec<ColumnReport> {
    let mut currency_cols = Vec::new();
    let mut percent_cols = Vec::new();
    for header in table.headers() {
        let markers = ColumnMarkers::detect(header);
        if markers.overlaps() {
            tracing::warn!(column = header, "Header matches both currency and percentage markers, cleaning as percentage");
        }
        match markers.kind() {
            ColumnKind::Currency => currency_cols.push(header.to_string()),
            ColumnKind::Percentage => percent_cols.push(header.to_string()),
            ColumnKind::Text => {}
        }
    }
    tracing::debug!(currency = ?currency_cols, percentage = ?percent_cols, "Detected numeric columns");

    let reports: Vec<ColumnReport> = table.columns_mut().map(classify_and_clean).collect();

    for report in reports.iter().filter(|r| r.kind != ColumnKind::Text) {
        tracing::debug!(
            column = %report.name,
            blank = report.blank,
            unparseable = report.unparseable,
            "Cleaned column"
        );
        if report.unparseable > 0 {
            tracing::warn!(column = %report.name, count = report.unparseable, "Unparseable cells were set to 0");
        }
    }
    reports
}
