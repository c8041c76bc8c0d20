//! JSON report generator.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::display::{Listing, ProductRow};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonListing<'a> {
    generated_at: String,
    tool: ToolInfo,
    /// `false` is the explicit no-match signal
    matching: bool,
    count: usize,
    #[serde(flatten)]
    context: &'a ReportContext,
    products: &'a [ProductRow],
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ReportGenerator for JsonReporter {
    fn generate_listing_report(
        &self,
        listing: &Listing,
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let report = JsonListing {
            generated_at: Utc::now().to_rfc3339(),
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            matching: listing.has_matches(),
            count: listing.len(),
            context,
            products: listing.rows(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
