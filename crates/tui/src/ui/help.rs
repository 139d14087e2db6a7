// crates/tui/src/ui/help.rs
//! Help overlay with the key binding reference

use crate::theme::Theme;
use crate::ui::centered_rect;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the help overlay
pub fn render(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        section_header("BROWSING", theme),
        help_item("↑ / k", "Move selection up", theme),
        help_item("↓ / j", "Move selection down", theme),
        help_item("Enter", "Open details for the selected book", theme),
        help_item("m / PgDn", "Show more results", theme),
        Line::from(""),
        section_header("OVERLAYS", theme),
        help_item("/", "Open the search form", theme),
        help_item("s", "Open settings", theme),
        help_item("h", "Show or hide this help", theme),
        help_item("Esc", "Close the open overlay", theme),
        Line::from(""),
        section_header("OTHER", theme),
        help_item("t", "Toggle day/night theme", theme),
        help_item("Mouse", "Click a book for details, wheel to move", theme),
        help_item("q / Ctrl+C", "Quit", theme),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color()))
            .title("❓ Help"),
    );

    frame.render_widget(help, area);
}

fn section_header(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", text),
        theme.accent_style(),
    ))
}

fn help_item(key: &str, description: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:12}", key), theme.highlight_style()),
        Span::styled(" → ", theme.text_secondary_style()),
        Span::styled(description.to_string(), theme.text_style()),
    ])
}
