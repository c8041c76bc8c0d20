//! Aligned terminal table for listings.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::display::{Listing, NO_MATCHING_MESSAGE, UserStyle, sort_icon};
use crate::sort::SortColumn;
use unicode_width::UnicodeWidthStr;

/// Column widths in terminal cells, in [`SortColumn::ALL`] order.
const COLUMN_WIDTHS: [usize; 4] = [6, 24, 24, 16];

/// Apply an ANSI color code to text when color is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, context: &ReportContext) -> String {
        let cells: Vec<String> = SortColumn::ALL
            .iter()
            .zip(COLUMN_WIDTHS)
            .map(|(column, width)| {
                let icon = sort_icon(&context.sort.state, *column).glyph();
                let label = format!("{} {icon}", column.header().to_uppercase());
                self.color(&pad(&label, width), "bold")
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_listing_report(
        &self,
        listing: &Listing,
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let Listing::Rows(rows) = listing else {
            return Ok(self.color(NO_MATCHING_MESSAGE, "dim"));
        };

        let total_width = COLUMN_WIDTHS.iter().sum::<usize>() + COLUMN_WIDTHS.len() - 1;
        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(self.header(context));
        lines.push("─".repeat(total_width));

        for row in rows {
            let user_color = match row.user_style {
                UserStyle::Link => "cyan",
                UserStyle::Danger => "red",
            };
            let line = format!(
                "{} {} {} {}",
                pad(&row.id.to_string(), COLUMN_WIDTHS[0]),
                pad(&truncate(&row.name, COLUMN_WIDTHS[1]), COLUMN_WIDTHS[1]),
                pad(&truncate(&row.category, COLUMN_WIDTHS[2]), COLUMN_WIDTHS[2]),
                self.color(&truncate(&row.user, COLUMN_WIDTHS[3]), user_color),
            );
            lines.push(line);
        }

        lines.push(String::new());
        let noun = if rows.len() == 1 { "product" } else { "products" };
        lines.push(format!("Total: {} {noun}", rows.len()));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Left-align `s` in `width` terminal cells.
fn pad(s: &str, width: usize) -> String {
    let used = s.width();
    if used >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - used))
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let end = floor_char_boundary(s, max_len - 3);
        format!("{}...", &s[..end])
    } else {
        let end = floor_char_boundary(s, max_len);
        s[..end].to_string()
    }
}

/// Find the largest byte index <= `index` that is a valid UTF-8 char boundary.
const fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}
