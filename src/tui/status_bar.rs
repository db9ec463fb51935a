//! Status bar widget for announcements and key hints

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{AppState, FocusArea, Theme};
use crate::branding::COMMAND_MENU_HINT;
use crate::state::ThemeMode;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Left-hand text: the live announcement when there is one, else key hints.
    #[must_use]
    pub fn message(state: &AppState) -> String {
        state.announcer.current().map_or_else(
            || {
                let focus_hint = match state.focus {
                    FocusArea::Page => "Tab focus",
                    FocusArea::Timeline => "↑↓ entry · Enter expand",
                    FocusArea::Skills => "←→ chip · Enter filter",
                };
                format!("{COMMAND_MENU_HINT} commands · {focus_hint} · t theme · q quit")
            },
            str::to_string,
        )
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(28)])
            .split(area);

        let left_style = if state.announcer.current().is_some() {
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", Self::message(state)),
                left_style,
            )))
            .style(Style::default().bg(theme.surface)),
            chunks[0],
        );

        let mode_glyph = match state.theme_store.mode() {
            ThemeMode::Dark => "☾",
            ThemeMode::Light => "☼",
        };
        let right = Line::from(vec![
            Span::styled(
                format!("{mode_glyph} {} ", state.theme_store.mode()),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                format!("· {} ", state.focus.label()),
                Style::default().fg(theme.text_secondary),
            ),
        ])
        .right_aligned();
        f.render_widget(
            Paragraph::new(right).style(Style::default().bg(theme.surface)),
            chunks[1],
        );
    }
}
