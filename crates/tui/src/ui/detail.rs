// crates/tui/src/ui/detail.rs
//! Detail overlay rendering

use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;
use bookdeck_catalog::Catalog;
use bookdeck_core::BookId;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the detail overlay for one book
///
/// The record is resolved against the full collection; if the id is
/// somehow gone, the overlay renders empty rather than failing.
pub fn render(frame: &mut Frame, catalog: &Catalog, id: BookId, state: &AppState, theme: &Theme) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_color()))
        .title("Book details (Esc: Close)");

    let Some(book) = catalog.find_book(id) else {
        frame.render_widget(block, area);
        return;
    };

    let subtitle = format!(
        "{} ({})",
        catalog.author_name(book.author),
        book.published_year()
    );
    let genres = book
        .genres
        .iter()
        .map(|genre| catalog.genre_name(*genre))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        Line::from(Span::styled(book.title.clone(), theme.highlight_style())),
        Line::from(Span::styled(subtitle, theme.text_secondary_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Genres: ", theme.text_secondary_style()),
            Span::styled(genres, theme.accent_style()),
        ]),
    ];

    if state.show_covers {
        lines.push(Line::from(vec![
            Span::styled("Cover:  ", theme.text_secondary_style()),
            Span::styled(book.image.clone(), theme.text_style()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        book.description.clone(),
        theme.text_style(),
    )));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(detail, area);
}
