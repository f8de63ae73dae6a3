// Percentage columns ("%"): "15,5%" is stored as the fraction 0.155
use super::ColumnCleaner;
use shared::models::ColumnKind;

pub struct PercentageCleaner;

impl ColumnCleaner for PercentageCleaner {
    fn kind(&self) -> ColumnKind {
        ColumnKind::Percentage
    }

    fn scale(&self, value: f64) -> f64 {
        value / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_divides_by_100() {
        let cleaner = PercentageCleaner;
        assert_eq!(cleaner.kind(), ColumnKind::Percentage);
        assert_eq!(cleaner.scale(15.5), 0.155);
        assert_eq!(cleaner.scale(100.0), 1.0);
        assert_eq!(cleaner.scale(0.0), 0.0);
    }
}
