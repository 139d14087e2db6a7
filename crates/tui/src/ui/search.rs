// crates/tui/src/ui/search.rs
//! Search overlay rendering

use crate::state::{AppState, SearchField};
use crate::theme::Theme;
use crate::ui::centered_rect;
use bookdeck_catalog::Catalog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the search overlay
pub fn render(frame: &mut Frame, catalog: &Catalog, state: &AppState, theme: &Theme) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_color()))
        .title("🔍 Search (Tab: Next field | Enter: Apply | Esc: Cancel)");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Author selector
            Constraint::Length(3), // Genre selector
            Constraint::Min(0),
        ])
        .split(inner);

    render_title_input(frame, chunks[0], state, theme);

    let authors = catalog.authors_sorted();
    let author_label = selector_label(
        state.search_form.author_index,
        "All Authors",
        authors.iter().map(|(_, name)| *name),
    );
    render_selector(
        frame,
        chunks[1],
        "Author",
        &author_label,
        state.search_form.focus == SearchField::Author,
        theme,
    );

    let genres = catalog.genres_sorted();
    let genre_label = selector_label(
        state.search_form.genre_index,
        "All Genres",
        genres.iter().map(|(_, name)| *name),
    );
    render_selector(
        frame,
        chunks[2],
        "Genre",
        &genre_label,
        state.search_form.focus == SearchField::Genre,
        theme,
    );
}

/// Renders the title text input
fn render_title_input(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.search_form.focus == SearchField::Title;
    let cursor = if focused { "_" } else { "" };

    let input = Paragraph::new(format!("{}{}", state.search_form.title, cursor))
        .style(theme.text_style())
        .block(field_block("Title", focused, theme));

    frame.render_widget(input, area);
}

/// Renders one selector field
fn render_selector(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let value_style = if focused {
        theme.highlight_style()
    } else {
        theme.text_style()
    };

    let selector = Paragraph::new(Line::from(vec![
        Span::styled("◂ ", theme.text_secondary_style()),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▸", theme.text_secondary_style()),
    ]))
    .block(field_block(name, focused, theme));

    frame.render_widget(selector, area);
}

/// Builds the bordered block around one form field
fn field_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if focused {
        theme.accent_style()
    } else {
        Style::default().fg(theme.border_color())
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Resolves a selector index to its display label
///
/// Index 0 is the "any" option; higher indices address the sorted
/// table entries.
fn selector_label<'a>(
    index: usize,
    any_label: &str,
    mut options: impl Iterator<Item = &'a str>,
) -> String {
    match index.checked_sub(1) {
        None => any_label.to_string(),
        Some(i) => options
            .nth(i)
            .map(str::to_string)
            .unwrap_or_else(|| any_label.to_string()),
    }
}
