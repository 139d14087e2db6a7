// crates/tui/src/theme.rs
//! Day/night theme system
//!
//! The browser carries exactly two palettes, mirroring the settings
//! form's day/night choice. The initial palette comes from the
//! configured color scheme; `auto` probes the terminal background.

use bookdeck_config::ColorScheme;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeType {
    /// Dark palette (default)
    Night,
    /// Light palette
    Day,
}

impl Default for ThemeType {
    fn default() -> Self {
        Self::Night
    }
}

impl ThemeType {
    /// Returns all available themes
    pub fn all() -> Vec<ThemeType> {
        vec![ThemeType::Night, ThemeType::Day]
    }

    /// Returns the theme name
    pub fn name(&self) -> &str {
        match self {
            ThemeType::Night => "Night",
            ThemeType::Day => "Day",
        }
    }

    /// Returns the other theme
    pub fn toggled(&self) -> ThemeType {
        match self {
            ThemeType::Night => ThemeType::Day,
            ThemeType::Day => ThemeType::Night,
        }
    }

    /// Resolves a configured color scheme to a theme
    ///
    /// `Auto` inspects the COLORFGBG hint the way a browser would
    /// consult the OS light/dark preference; terminals that don't set
    /// it get the night palette.
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Day => ThemeType::Day,
            ColorScheme::Night => ThemeType::Night,
            ColorScheme::Auto => Self::detect(std::env::var("COLORFGBG").ok().as_deref()),
        }
    }

    /// Classifies a COLORFGBG value ("<fg>;<bg>") as day or night
    pub fn detect(colorfgbg: Option<&str>) -> Self {
        let background = colorfgbg
            .and_then(|value| value.rsplit(';').next())
            .and_then(|raw| raw.trim().parse::<u8>().ok());

        match background {
            // 7 and 15 are the light ANSI backgrounds
            Some(7) | Some(15) => ThemeType::Day,
            _ => ThemeType::Night,
        }
    }
}

/// Color theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,
    /// Primary text color
    pub text: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Background color
    pub background: Color,
    /// Highlight/selection color
    pub highlight: Color,
    /// Accent color
    pub accent: Color,
    /// Error/notice color
    pub error: Color,
    /// Border color
    pub border: Color,
}

impl Theme {
    /// Creates a new theme
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Night => Self::night(),
            ThemeType::Day => Self::day(),
        }
    }

    /// Night theme (default)
    fn night() -> Self {
        Self {
            theme_type: ThemeType::Night,
            text: Color::White,
            text_secondary: Color::Gray,
            background: Color::Rgb(10, 10, 20),
            highlight: Color::Yellow,
            accent: Color::Cyan,
            error: Color::Red,
            border: Color::Gray,
        }
    }

    /// Day theme
    fn day() -> Self {
        Self {
            theme_type: ThemeType::Day,
            text: Color::Black,
            text_secondary: Color::DarkGray,
            background: Color::White,
            highlight: Color::Blue,
            accent: Color::Magenta,
            error: Color::Red,
            border: Color::DarkGray,
        }
    }

    /// Returns base text style
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Returns secondary text style
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Returns highlighted style
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Returns accent style
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns error style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Returns border color
    pub fn border_color(&self) -> Color {
        self.border
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::new(ThemeType::Night);
        assert_eq!(theme.theme_type, ThemeType::Night);

        let theme = Theme::new(ThemeType::Day);
        assert_eq!(theme.theme_type, ThemeType::Day);
    }

    #[test]
    fn test_all_themes() {
        for theme_type in ThemeType::all() {
            let theme = Theme::new(theme_type);
            assert_eq!(theme.theme_type, theme_type);
        }
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(ThemeType::Night.name(), "Night");
        assert_eq!(ThemeType::Day.name(), "Day");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemeType::Night.toggled(), ThemeType::Day);
        assert_eq!(ThemeType::Day.toggled(), ThemeType::Night);
    }

    #[test]
    fn test_from_scheme_explicit() {
        assert_eq!(ThemeType::from_scheme(ColorScheme::Day), ThemeType::Day);
        assert_eq!(ThemeType::from_scheme(ColorScheme::Night), ThemeType::Night);
    }

    #[test]
    fn test_detect_light_backgrounds() {
        assert_eq!(ThemeType::detect(Some("0;15")), ThemeType::Day);
        assert_eq!(ThemeType::detect(Some("0;7")), ThemeType::Day);
    }

    #[test]
    fn test_detect_dark_backgrounds() {
        assert_eq!(ThemeType::detect(Some("15;0")), ThemeType::Night);
        assert_eq!(ThemeType::detect(Some("7;4")), ThemeType::Night);
    }

    #[test]
    fn test_detect_missing_or_malformed() {
        assert_eq!(ThemeType::detect(None), ThemeType::Night);
        assert_eq!(ThemeType::detect(Some("default")), ThemeType::Night);
        assert_eq!(ThemeType::detect(Some("")), ThemeType::Night);
    }

    #[test]
    fn test_theme_styles() {
        let theme = Theme::default();
        let _ = theme.text_style();
        let _ = theme.highlight_style();
        let _ = theme.border_color();
    }
}
