// Brazilian number format handling shared by the converter and its tests.
// Source files use '.' as thousands separator and ',' as decimal separator.

pub mod brazilian_format {
    use std::str::FromStr;
    use anyhow::{Result, anyhow};

    // Parses decimals like "1.234,56" or "123,45" into f64
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s.trim()
            .replace('.', "")  // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        let value = f64::from_str(&normalized)
            .map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))?;
        if !value.is_finite() {
            return Err(anyhow!("Failed to parse decimal '{}': not a finite number", s));
        }
        Ok(value)
    }

    /// Result of leniently converting one raw cell.
    ///
    /// Both `Blank` and `Unparseable` stand for `0.0`; they are kept apart so
    /// callers can report data-quality problems without failing the run.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Normalized {
        Value(f64),
        Blank,
        Unparseable(String),
    }

    impl Normalized {
        pub fn value(&self) -> f64 {
            match self {
                Normalized::Value(v) => *v,
                Normalized::Blank | Normalized::Unparseable(_) => 0.0,
            }
        }

        pub fn is_unparseable(&self) -> bool {
            matches!(self, Normalized::Unparseable(_))
        }
    }

    /// Converts a raw cell such as `"1.234,56"`, `"15,5%"` or `"'200,00'"`.
    ///
    /// Quotes and percent signs are stripped, every `.` is dropped and `,`
    /// becomes the decimal point. Never fails: absent or blank input is
    /// `Blank`, anything left that does not parse is `Unparseable`.
    pub fn normalize(raw: Option<&str>) -> Normalized {
        let raw = match raw {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Normalized::Blank,
        };

        let stripped: String = raw
            .chars()
            .filter(|c| !matches!(c, '"' | '\'' | '%'))
            .collect();

        match parse_decimal(&stripped) {
            Ok(v) => Normalized::Value(v),
            Err(e) => Normalized::Unparseable(e.to_string()),
        }
    }

}
