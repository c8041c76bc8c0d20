//! Report generation for product listings.
//!
//! This module provides the non-interactive output formats:
//! - Table: Aligned tabular terminal output
//! - JSON: Structured data for programmatic integration
//! - CSV: Spreadsheet import

mod csv;
mod json;
pub mod output;
mod table;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use output::{OutputTarget, auto_detect_format, should_use_color, write_output};
pub use table::TableReporter;
pub use types::{AppliedFilter, AppliedSort, ReportContext, ReportFormat};

use crate::display::Listing;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a listing produced under `context`
    fn generate_listing_report(
        &self,
        listing: &Listing,
        context: &ReportContext,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_listing_report(
        &self,
        listing: &Listing,
        context: &ReportContext,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_listing_report(listing, context)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        // The TUI is not a report; listings fall back to the table
        ReportFormat::Auto | ReportFormat::Tui | ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}
