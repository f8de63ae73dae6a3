// Converter configuration module
pub mod settings;

pub use settings::ReportSettings;
