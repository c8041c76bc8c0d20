//! CSV report generator.
//!
//! One row per visible product, suitable for spreadsheet import.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::display::{Listing, UserStyle};
use std::fmt::Write as _;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_listing_report(
        &self,
        listing: &Listing,
        _context: &ReportContext,
    ) -> Result<String, ReportError> {
        let mut content = String::from("ID,Product,Category,User,Style\n");

        for row in listing.rows() {
            let style = match row.user_style {
                UserStyle::Link => "link",
                UserStyle::Danger => "danger",
            };
            writeln!(
                content,
                "{},\"{}\",\"{}\",\"{}\",{}",
                row.id,
                escape_csv(&row.name),
                escape_csv(&row.category),
                escape_csv(&row.user),
                style
            )?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace('\n', " ")
}
