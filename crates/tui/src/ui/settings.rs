// crates/tui/src/ui/settings.rs
//! Settings overlay rendering

use crate::state::AppState;
use crate::theme::{Theme, ThemeType};
use crate::ui::centered_rect;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the settings overlay
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = centered_rect(40, 40, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled("Theme", theme.text_secondary_style())),
        Line::from(""),
    ];
    for theme_type in ThemeType::all() {
        lines.push(choice_line(
            theme_type,
            state.settings_form.choice == theme_type,
            theme,
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "←/→: Toggle | Enter: Apply | Esc: Cancel",
        theme.text_secondary_style(),
    )));

    let settings = Paragraph::new(lines)
        .style(theme.text_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("⚙ Settings"),
        );

    frame.render_widget(settings, area);
}

/// Builds the line for one theme choice
fn choice_line(theme_type: ThemeType, chosen: bool, theme: &Theme) -> Line<'static> {
    let (marker, style) = if chosen {
        ("▸ ", theme.highlight_style())
    } else {
        ("  ", theme.text_style())
    };

    Line::from(Span::styled(
        format!("{}{}", marker, theme_type.name()),
        style,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_line_marks_chosen() {
        let theme = Theme::default();
        let chosen = choice_line(ThemeType::Night, true, &theme);
        let other = choice_line(ThemeType::Day, false, &theme);

        assert!(format!("{:?}", chosen).contains('▸'));
        assert!(!format!("{:?}", other).contains('▸'));
    }
}
