// crates/tui/src/ui/preview.rs
//! Preview rendering for one book
//!
//! A preview is the compact list representation of a book record:
//! two lines, title over resolved author name.

use crate::theme::Theme;
use bookdeck_core::Book;
use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Lines a preview occupies in the list
pub const ITEM_HEIGHT: u16 = 2;

/// Builds the list item for one book
pub fn preview(
    book: &Book,
    author_name: &str,
    selected: bool,
    width: u16,
    theme: &Theme,
) -> ListItem<'static> {
    let max_width = usize::from(width.saturating_sub(4));

    let style = if selected {
        theme.highlight_style()
    } else {
        theme.text_style()
    };

    let marker = if selected { "▸ " } else { "  " };
    let title = truncate_to_width(&book.title, max_width);
    let author = truncate_to_width(author_name, max_width);

    ListItem::new(vec![
        Line::from(Span::styled(format!("{}📖 {}", marker, title), style)),
        Line::from(Span::styled(
            format!("    by {}", author),
            theme.text_secondary_style(),
        )),
    ])
}

/// Truncates a string to the given display width, appending an
/// ellipsis when anything was cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdeck_core::{AuthorId, GenreId};
    use chrono::TimeZone;

    fn book(title: &str) -> Book {
        Book::new(
            title.to_string(),
            AuthorId::new(),
            "https://example.org/c.jpg".to_string(),
            "Description.".to_string(),
            chrono::Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
            vec![GenreId::new()],
        )
    }

    #[test]
    fn test_preview_has_two_lines() {
        let theme = Theme::default();
        let item = preview(&book("Title"), "Author", false, 80, &theme);
        assert_eq!(item.height(), ITEM_HEIGHT as usize);
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        let out = truncate_to_width("abcdefgh", 5);
        assert_eq!(out, "abcd…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn test_truncate_handles_wide_chars() {
        // CJK characters are two columns wide.
        let out = truncate_to_width("漢漢漢漢", 5);
        assert!(out.width() <= 5);
        assert!(out.ends_with('…'));
    }
}
