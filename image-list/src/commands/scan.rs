use crate::context::AppContext;
use crate::format::{self, OutputFormat};
use libimagelist::{ImageScanner, Report, Result};
use std::path::PathBuf;

/// Scan `directories` and build the report.
pub fn run_scan(ctx: &AppContext, directories: &[PathBuf], validation: bool) -> Result<Report> {
    if let Some(path) = &ctx.config_path {
        tracing::info!("Using configuration from {}", path.display());
    }

    let scanner = ImageScanner::builder()
        .from_config(&ctx.config)
        .validation(validation)
        .build();

    let outcome = scanner.scan(directories)?;
    if outcome.stats.files_failed > 0 {
        tracing::warn!("{} files could not be scanned", outcome.stats.files_failed);
    }

    Ok(Report::new(outcome.images, scanner.is_validating()))
}

/// Handle the scan, printing the report to stdout
pub fn handle_scan(
    ctx: &AppContext,
    directories: &[PathBuf],
    validation: bool,
    format: OutputFormat,
) {
    let report = match run_scan(ctx, directories, validation) {
        Ok(report) => report,
        Err(e) => {
            format::error(ctx.color, &e.to_string());
            std::process::exit(1);
        }
    };

    match format::format_output(&report, format) {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{}", output.trim_end_matches('\n')),
        Err(e) => {
            format::error(ctx.color, &e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
