// Converter main entry point
use converter::{ReportService, ReportSettings};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    info!("Starting sales report conversion...");

    // Fixed layout: dados/ and outputs/ under the working directory
    let settings = ReportSettings::default();
    let result = ReportService::new(settings).and_then(|service| service.run());

    match result {
        Ok(summary) => {
            println!("Report saved to: {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = ?e, "Report conversion failed");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
