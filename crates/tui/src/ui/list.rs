// crates/tui/src/ui/list.rs
//! Book list rendering
//!
//! Renders the visible slice of the match set as preview rows, with
//! the show-more control underneath. The geometry helpers are pure
//! functions shared with mouse hit-testing.

use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::preview::{self, ITEM_HEIGHT};
use bookdeck_catalog::Catalog;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Regions of the content area
#[derive(Debug, Clone, Copy)]
pub struct ListAreas {
    /// The preview rows
    pub items: Rect,
    /// The show-more control
    pub button: Rect,
}

/// Splits the content area into the list and the show-more control
pub fn split(area: Rect) -> ListAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    ListAreas {
        items: chunks[0],
        button: chunks[1],
    }
}

/// Returns how many preview rows fit in the list area
pub fn viewport_rows(items_area: Rect) -> usize {
    usize::from(items_area.height.saturating_sub(2) / ITEM_HEIGHT)
}

/// Returns the first visible row index for a given selection
///
/// The window slides just enough to keep the selection in view.
pub fn window_start(selected: usize, rows: usize) -> usize {
    if rows == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(rows)
}

/// Resolves a pointer position to a visible row index
///
/// Walks the rendered row geometry for the nearest enclosing preview;
/// positions on the border or past the last row resolve to nothing.
pub fn hit_test(
    items_area: Rect,
    selected: usize,
    visible_len: usize,
    rows: usize,
    x: u16,
    y: u16,
) -> Option<usize> {
    if items_area.width < 2 || items_area.height < 2 {
        return None;
    }
    // Step inside the block borders.
    let inner = Rect::new(
        items_area.x + 1,
        items_area.y + 1,
        items_area.width - 2,
        items_area.height - 2,
    );
    if x < inner.x || x >= inner.x + inner.width || y < inner.y || y >= inner.y + inner.height {
        return None;
    }

    let row = usize::from((y - inner.y) / ITEM_HEIGHT);
    if row >= rows {
        return None;
    }

    let index = window_start(selected, rows) + row;
    if index < visible_len {
        Some(index)
    } else {
        None
    }
}

/// Renders the book list and the show-more control
pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &AppState, theme: &Theme) {
    let areas = split(area);

    if state.pager.is_empty() {
        render_no_results(frame, areas.items, theme);
    } else {
        render_previews(frame, areas.items, catalog, state, theme);
    }

    render_show_more(frame, areas.button, state, theme);
}

/// Renders the visible preview rows
fn render_previews(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    state: &AppState,
    theme: &Theme,
) {
    let rows = viewport_rows(area);
    let start = window_start(state.selected, rows);
    let visible = state.pager.visible();
    let end = (start + rows).min(visible.len());

    let items: Vec<ListItem> = visible[start..end]
        .iter()
        .enumerate()
        .filter_map(|(offset, id)| {
            let index = start + offset;
            let book = catalog.find_book(*id)?;
            Some(preview::preview(
                book,
                catalog.author_name(book.author),
                index == state.selected,
                area.width,
                theme,
            ))
        })
        .collect();

    let title = format!(
        "📚 Books ({} of {} | ↑/↓: Navigate | Enter: Details)",
        visible.len(),
        state.pager.matches().len()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title(title),
        )
        .style(theme.text_style());

    frame.render_widget(list, area);
}

/// Renders the empty-result message
fn render_no_results(frame: &mut Frame, area: Rect, theme: &Theme) {
    let message = Paragraph::new(Line::from(Span::styled(
        "No results found. Your filters might be too narrow.",
        theme.text_secondary_style(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color()))
            .title("📚 Books"),
    );

    frame.render_widget(message, area);
}

/// Renders the show-more control
///
/// The label always shows the remaining count clamped to zero, and
/// the control greys out exactly when nothing remains.
fn render_show_more(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let remaining = state.pager.remaining();
    let enabled = state.pager.can_show_more();

    let label_style = if enabled {
        theme.highlight_style()
    } else {
        theme.text_secondary_style()
    };

    let mut spans = vec![Span::styled(
        format!("Show more ({})", remaining),
        label_style,
    )];
    if enabled {
        spans.push(Span::styled(
            "  m / click to reveal",
            theme.text_secondary_style(),
        ));
    }

    let button = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color())),
        );

    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_reserves_button_rows() {
        let areas = split(Rect::new(0, 3, 80, 24));
        assert_eq!(areas.items.height, 21);
        assert_eq!(areas.button.height, 3);
        assert_eq!(areas.button.y, 24);
    }

    #[test]
    fn test_viewport_rows() {
        // 24 rows minus 2 border rows leaves 11 two-line previews.
        assert_eq!(viewport_rows(Rect::new(0, 0, 80, 24)), 11);
        assert_eq!(viewport_rows(Rect::new(0, 0, 80, 2)), 0);
    }

    #[test]
    fn test_window_start_keeps_selection_visible() {
        assert_eq!(window_start(0, 5), 0);
        assert_eq!(window_start(4, 5), 0);
        assert_eq!(window_start(5, 5), 1);
        assert_eq!(window_start(9, 5), 5);
    }

    #[test]
    fn test_hit_test_first_row() {
        let area = Rect::new(0, 3, 80, 21);
        let rows = viewport_rows(area);
        assert_eq!(hit_test(area, 0, 10, rows, 2, 4), Some(0));
        assert_eq!(hit_test(area, 0, 10, rows, 2, 5), Some(0));
        assert_eq!(hit_test(area, 0, 10, rows, 2, 6), Some(1));
    }

    #[test]
    fn test_hit_test_outside_area() {
        let area = Rect::new(0, 3, 80, 21);
        let rows = viewport_rows(area);
        // On the border.
        assert_eq!(hit_test(area, 0, 10, rows, 0, 3), None);
        // Above the list entirely.
        assert_eq!(hit_test(area, 0, 10, rows, 5, 1), None);
    }

    #[test]
    fn test_hit_test_past_last_visible_row() {
        let area = Rect::new(0, 3, 80, 21);
        let rows = viewport_rows(area);
        // Only 2 visible books; a click on the fourth row misses.
        assert_eq!(hit_test(area, 0, 2, rows, 5, 4 + 3 * ITEM_HEIGHT), None);
    }

    #[test]
    fn test_hit_test_respects_scroll_window() {
        let area = Rect::new(0, 3, 80, 12);
        let rows = viewport_rows(area);
        assert_eq!(rows, 5);

        // Selection at index 9 scrolls the window down to start at 5,
        // so the first rendered row is book 5.
        assert_eq!(hit_test(area, 9, 20, rows, 5, 4), Some(5));
    }
}
