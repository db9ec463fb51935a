//! Color palettes for the light and dark themes.
//!
//! The active palette is owned by [`ThemeStore`](crate::state::ThemeStore);
//! every frame is drawn from it, so swapping the palette is the terminal
//! equivalent of flipping the document's dark attribute.

use ratatui::style::Color;

use crate::models::SkillCategory;
use crate::state::ThemeMode;

/// Semantic colors for the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Chrome
    /// Borders, section titles and the header name
    pub primary: Color,
    /// Focus rings, selected palette rows, active chips
    pub accent: Color,
    /// Confirmation messages
    pub success: Color,
    /// Error messages
    pub error: Color,

    // Text hierarchy
    /// Body text
    pub text: Color,
    /// Company names, dates and labels
    pub text_secondary: Color,
    /// Hints and disabled content
    pub text_muted: Color,

    // Backgrounds
    /// Page background
    pub background: Color,
    /// Popup and card background
    pub surface: Color,
    /// Selection background
    pub highlight_bg: Color,

    // Timeline and skills
    /// Vertical timeline rail
    pub rail: Color,
    /// Filled part of a skill bar
    pub bar_filled: Color,
    /// Empty part of a skill bar
    pub bar_empty: Color,
}

impl Theme {
    /// Dark palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),
            highlight_bg: Color::DarkGray,

            rail: Color::Rgb(70, 70, 90),
            bar_filled: Color::Cyan,
            bar_empty: Color::Rgb(50, 50, 50),
        }
    }

    /// Light palette for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(245, 245, 245),
            highlight_bg: Color::Rgb(230, 230, 230),

            rail: Color::Rgb(190, 190, 210),
            bar_filled: Color::Blue,
            bar_empty: Color::Rgb(220, 220, 220),
        }
    }

    /// Palette for a theme mode.
    #[must_use]
    pub const fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Accent color for a skill category chip and its bars.
    #[must_use]
    pub const fn category_color(&self, category: SkillCategory) -> Color {
        match category {
            SkillCategory::AiMl => Color::Magenta,
            SkillCategory::Technical => self.bar_filled,
            SkillCategory::Leadership => self.success,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow is unreadable on white
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_from_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
