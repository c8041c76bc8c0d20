//! Reusable widgets for the browse screen.

use super::constants::{MIN_HEIGHT, MIN_WIDTH};
use crate::tui::theme::{Styles, colors};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let (budget, suffix) = if max_width > 3 {
        (max_width - 3, "...")
    } else {
        (max_width, "")
    };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    format!("{truncated}{suffix}")
}

/// A pill-style toggle: solid when active, outlined otherwise.
pub fn toggle_span(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Styles::active_toggle()
    } else {
        Styles::inactive_toggle()
    };
    Span::styled(format!(" {label} "), style)
}

/// Render the empty state shown in place of the product table.
pub fn render_empty_state_enhanced(
    frame: &mut Frame,
    area: Rect,
    icon: &str,
    message: &str,
    reason: Option<&str>,
    action_hint: Option<&str>,
) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(icon.to_string(), Style::default().fg(colors().text_muted)),
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(colors().text)),
    ];

    if let Some(r) = reason {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            r.to_string(),
            Style::default().fg(colors().text_muted),
        ));
    }

    if let Some(hint) = action_hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            hint.to_string(),
            Style::default().fg(colors().accent),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required_width: u16, required_height: u16) {
    let lines = vec![
        Line::styled("Terminal too small", Styles::warning()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(format!("{}x{}", area.width, area.height), Styles::text()),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
        Line::from(""),
        Line::styled("Please resize your terminal", Styles::text_muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
