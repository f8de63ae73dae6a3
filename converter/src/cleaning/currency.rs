// Monetary columns ("Fat.", "Valor"): the normalized value is stored as is
use super::ColumnCleaner;
use shared::models::ColumnKind;

pub struct CurrencyCleaner;

impl ColumnCleaner for CurrencyCleaner {
    fn kind(&self) -> ColumnKind {
        ColumnKind::Currency
    }

    fn scale(&self, value: f64) -> f64 {
        value
    }
}
