// crates/tui/src/ui/mod.rs
//! UI rendering modules

pub mod detail;
pub mod help;
pub mod list;
pub mod preview;
pub mod search;
pub mod settings;

use crate::{
    state::{AppState, Overlay},
    theme::Theme,
};
use bookdeck_catalog::Catalog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fixed screen regions
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,
    /// Book list plus the show-more control
    pub content: Rect,
    /// Status bar
    pub status: Rect,
}

/// Splits the terminal into header, content and status regions
///
/// Mouse hit-testing recomputes this same layout, so it must stay a
/// pure function of the area.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

/// Renders the main UI
pub fn render(frame: &mut Frame, catalog: &Catalog, state: &AppState, theme: &Theme) {
    let areas = screen_areas(frame.area());

    render_header(frame, areas.header, theme);
    list::render(frame, areas.content, catalog, state, theme);
    render_status_bar(frame, areas.status, state, theme);

    match state.overlay {
        Some(Overlay::Search) => search::render(frame, catalog, state, theme),
        Some(Overlay::Settings) => settings::render(frame, state, theme),
        Some(Overlay::Detail(id)) => detail::render(frame, catalog, id, state, theme),
        Some(Overlay::Help) => help::render(frame, theme),
        None => {}
    }
}

/// Renders the title bar
fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("📚 Bookdeck", theme.highlight_style()),
        Span::raw("  "),
        Span::styled("terminal book catalog", theme.text_secondary_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    );

    frame.render_widget(header, area);
}

/// Renders the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let status_text = if let Some(ref msg) = state.status_message {
        msg.clone()
    } else {
        format!(
            "q: Quit | /: Search | s: Settings | h: Help | t: Theme ({})",
            state.theme_type.name()
        )
    };

    let counter = format!(
        " {}/{} ",
        state.pager.visible_len(),
        state.pager.matches().len()
    );

    let status = Paragraph::new(Line::from(vec![
        Span::styled(counter, theme.accent_style()),
        Span::styled(status_text, theme.text_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    );

    frame.render_widget(status, area);
}

/// Returns a centered rect taking the given percentages of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_areas_partition_height() {
        let areas = screen_areas(Rect::new(0, 0, 80, 30));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 3);
        assert_eq!(areas.content.height, 24);
        assert_eq!(areas.content.y, 3);
    }

    #[test]
    fn test_centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, parent);
        assert!(popup.x >= parent.x);
        assert!(popup.y >= parent.y);
        assert!(popup.right() <= parent.right());
        assert!(popup.bottom() <= parent.bottom());
    }
}
