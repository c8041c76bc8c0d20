//! Browse-screen rendering and the terminal main loop.

use super::app::{App, ClickTarget, InputMode};
use super::constants::{MIN_HEIGHT, MIN_WIDTH};
use super::events::{Event, EventHandler, handle_key_event, handle_mouse_event};
use super::theme::{FooterHints, Styles, colors, current_theme_name, render_footer_hints};
use super::widgets::{
    check_terminal_size, render_empty_state_enhanced, render_size_warning, toggle_span,
    truncate_str,
};
use crate::display::{Listing, NO_MATCHING_MESSAGE};
use crate::sort::SortColumn;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table, TableState,
    },
};
use std::io::{self, stdout};
use unicode_width::UnicodeWidthStr;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Run the TUI application
pub fn run_tui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(app.tick_rate_ms);
    let result = main_loop(&mut terminal, app, &events);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    if app.mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function
///
/// Also records the clickable regions of this frame on `app`.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.click_targets.clear();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, filters panel, table, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(5), // Filters
            Constraint::Min(5),    // Products
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let listing = app.session().listing();

    render_header(frame, chunks[0], app, &listing);
    render_filters(frame, chunks[1], app);
    match listing {
        Listing::Rows(_) => render_products(frame, chunks[2], app, &listing),
        Listing::NoMatchingProducts => render_no_matches(frame, chunks[2], app),
    }
    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, listing: &Listing) {
    let total = app.session().catalog().products().len();
    let line = Line::from(vec![
        Span::styled(" Product Categories ", Styles::header_title()),
        Span::styled(
            format!(" {} of {} products ", listing.len(), total),
            Styles::text_muted(),
        ),
        Span::styled(format!(" theme: {} ", current_theme_name()), Styles::text_muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Lays out spans left to right and records click targets as it goes.
struct SpanRow {
    spans: Vec<Span<'static>>,
    x: u16,
    y: u16,
    right: u16,
}

impl SpanRow {
    fn new(area: Rect, y_offset: u16) -> Self {
        Self {
            spans: Vec::new(),
            x: area.x,
            y: area.y + y_offset,
            right: area.right(),
        }
    }

    fn push(&mut self, span: Span<'static>) -> Rect {
        let width = u16::try_from(span.content.width()).unwrap_or(u16::MAX);
        let visible = width.min(self.right.saturating_sub(self.x));
        let rect = Rect::new(self.x, self.y, visible, 1);
        self.x = self.x.saturating_add(width);
        self.spans.push(span);
        rect
    }

    fn push_target(&mut self, span: Span<'static>, target: ClickTarget, app: &mut App) {
        let rect = self.push(span);
        if rect.width > 0 {
            app.click_targets.push((rect, target));
        }
    }

    fn gap(&mut self) {
        self.push(Span::raw(" "));
    }

    fn into_line(self) -> Line<'static> {
        Line::from(self.spans)
    }
}

fn render_filters(frame: &mut Frame, area: Rect, app: &mut App) {
    let searching = app.input_mode() == InputMode::Search;
    let block = Block::default()
        .title(" Filters ")
        .title_style(Styles::header_title())
        .borders(Borders::ALL)
        .border_style(if searching {
            Styles::border_focused()
        } else {
            Styles::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // User tabs
    let mut users = SpanRow::new(inner, 0);
    users.push(Span::styled("User:     ", Styles::text_muted()));
    for tab in app.session().user_tabs() {
        let span = toggle_span(tab.label(), tab.active);
        users.push_target(span, ClickTarget::User(tab.name.clone()), app);
        users.gap();
    }

    // Search input with its clear control
    let session = app.session();
    let search_text = session.filter().search_text.clone();
    let can_clear = session.can_clear_search();
    let input_width = usize::from(inner.width.saturating_sub(22)).max(8);
    let mut search = SpanRow::new(inner, 1);
    search.push(Span::styled("Search:   ", Styles::text_muted()));
    let shown = if search_text.is_empty() && !searching {
        "press / to search".to_string()
    } else {
        let cursor = if searching { "▏" } else { "" };
        format!("{}{cursor}", truncate_str(&search_text, input_width))
    };
    let input_style = if search_text.is_empty() && !searching {
        Styles::text_muted().italic()
    } else {
        Styles::text()
    };
    search.push_target(
        Span::styled(format!("{shown:<input_width$}"), input_style),
        ClickTarget::SearchInput,
        app,
    );
    if can_clear {
        search.gap();
        search.push_target(
            Span::styled("[x] clear", Styles::shortcut_key()),
            ClickTarget::ClearSearch,
            app,
        );
    }

    // Category buttons and reset
    let mut categories = SpanRow::new(inner, 2);
    categories.push(Span::styled("Category: ", Styles::text_muted()));
    let all_active = app.session().all_categories_active();
    categories.push_target(toggle_span("All", all_active), ClickTarget::AllCategories, app);
    for button in app.session().category_buttons() {
        categories.gap();
        categories.push_target(
            toggle_span(&button.label(), button.selected),
            ClickTarget::Category(button.name.clone()),
            app,
        );
    }
    categories.gap();
    categories.gap();
    categories.push_target(
        Span::styled(" Reset all filters ", Style::default().fg(colors().error)),
        ClickTarget::ResetAll,
        app,
    );

    let lines = vec![users.into_line(), search.into_line(), categories.into_line()];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn column_widths() -> [Constraint; 4] {
    [
        Constraint::Length(6),
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Fill(2),
    ]
}

fn render_products(frame: &mut Frame, area: Rect, app: &mut App, listing: &Listing) {
    let rows_data = listing.rows();
    let session = app.session();

    let header_cells = SortColumn::ALL.iter().map(|column| {
        let icon = session.sort_icon(*column).glyph();
        Cell::from(format!("{} {icon}", column.header()))
    });
    let header = Row::new(header_cells).style(Styles::header_title()).height(1);

    let rows = rows_data.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.id.to_string()),
            Cell::from(row.name.clone()),
            Cell::from(row.category.clone()),
            Cell::from(row.user.clone()).style(Styles::user(row.user_style)),
        ])
    });

    let block = Block::default()
        .title(" Products ")
        .title_style(Styles::header_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = TableState::default().with_selected(Some(app.rows.index()));
    frame.render_stateful_widget(table, area, &mut state);

    // Column headers toggle sort; data rows select
    let selection_width = u16::try_from(HIGHLIGHT_SYMBOL.width()).unwrap_or(0);
    let columns_area = Rect {
        x: inner.x + selection_width,
        width: inner.width.saturating_sub(selection_width),
        ..inner
    };
    let columns = Layout::horizontal(column_widths())
        .spacing(1)
        .split(columns_area);
    for (rect, column) in columns.iter().zip(SortColumn::ALL) {
        app.click_targets.push((
            Rect { height: 1, ..*rect },
            ClickTarget::SortHeader(column),
        ));
    }
    let body_rows = usize::from(inner.height.saturating_sub(1));
    let offset = state.offset();
    for i in 0..body_rows.min(rows_data.len().saturating_sub(offset)) {
        let y = inner.y + 1 + u16::try_from(i).unwrap_or(u16::MAX);
        app.click_targets
            .push((Rect::new(inner.x, y, inner.width, 1), ClickTarget::Row(offset + i)));
    }

    if rows_data.len() > body_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"));
        let mut scrollbar_state = ScrollbarState::new(rows_data.len()).position(app.rows.index());
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn render_no_matches(frame: &mut Frame, area: Rect, app: &App) {
    let filter = app.session().filter();
    let mut reasons = Vec::new();
    if let Some(ref user) = filter.selected_user {
        reasons.push(format!("user = {user}"));
    }
    if !filter.search_text.is_empty() {
        reasons.push(format!("name contains \"{}\"", filter.search_text));
    }
    if !filter.selected_categories.is_empty() {
        let names: Vec<&str> = filter
            .selected_categories
            .iter()
            .map(String::as_str)
            .collect();
        reasons.push(format!("category in {}", names.join(", ")));
    }
    let reason = reasons.join(" and ");

    render_empty_state_enhanced(
        frame,
        area,
        "🔍",
        NO_MATCHING_MESSAGE,
        (!reason.is_empty()).then_some(reason.as_str()),
        Some("Press [r] to reset all filters"),
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let filter = session.filter();
    let sort = session.sort();

    let user = filter.selected_user.as_deref().unwrap_or("All");
    let categories = if filter.selected_categories.is_empty() {
        "All".to_string()
    } else {
        filter
            .selected_categories
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let sort_label = sort.active_column().map_or_else(
        || "none".to_string(),
        |column| format!("{} {}", column.header(), sort.direction.label()),
    );

    let line = Line::from(vec![
        Span::styled(" User: ", Styles::text_muted()),
        Span::styled(user.to_string(), Styles::text()),
        Span::styled(" │ Categories: ", Styles::text_muted()),
        Span::styled(categories, Styles::text()),
        Span::styled(" │ Sort: ", Styles::text_muted()),
        Span::styled(sort_label, Styles::text()),
    ]);
    frame.render_widget(Paragraph::new(line).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    // Show status message if set, otherwise the key hints
    if let Some(msg) = app.status_message() {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.to_string(), Style::default().fg(colors().accent).bold()),
        ]);
        frame.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let hints = match app.input_mode() {
        InputMode::Search => FooterHints::search_input(),
        InputMode::Normal => FooterHints::browse(app.session().can_clear_search()),
    };
    frame.render_widget(Paragraph::new(Line::from(render_footer_hints(&hints))), area);
}
