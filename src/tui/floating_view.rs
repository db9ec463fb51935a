//! Floating scroll cue and command trigger buttons.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

use crate::branding::COMMAND_MENU_HINT;
use crate::controllers::{FloatingTrigger, Tooltip};
use crate::tui::Theme;

const SCROLL_CUE_LABELS: [&str; 2] = ["↓ Experience", "⇣ Experience"];
const BUTTON_HEIGHT: u16 = 3;

fn button_width(label: &str) -> u16 {
    u16::try_from(unicode_width::UnicodeWidthStr::width(label))
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

/// Bottom-centre rectangle of the scroll cue inside the page area.
#[must_use]
pub fn scroll_cue_rect(area: Rect) -> Rect {
    let width = button_width(SCROLL_CUE_LABELS[0]).min(area.width);
    let height = BUTTON_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    }
}

/// Bottom-right rectangle of the command trigger inside the page area.
#[must_use]
pub fn command_trigger_rect(area: Rect) -> Rect {
    let width = button_width(COMMAND_MENU_HINT).min(area.width);
    let height = BUTTON_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width + 2),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    }
}

/// Whether a screen position lies inside `rect`.
#[must_use]
pub const fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

fn faded(style: Style, opacity: f32) -> Style {
    if opacity < 0.5 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// Draws the scroll cue when shown. The idle bounce alternates the arrow.
pub fn render_scroll_cue(
    f: &mut Frame,
    area: Rect,
    cue: &FloatingTrigger,
    now: Instant,
    reduced_motion: bool,
    theme: &Theme,
) {
    if !cue.is_shown() {
        return;
    }
    let rect = scroll_cue_rect(area);
    let label = SCROLL_CUE_LABELS[cue.animation_frame(now, reduced_motion)];
    let style = faded(
        Style::default().fg(theme.primary).bg(theme.surface),
        cue.opacity(now, reduced_motion),
    );

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        rect,
    );
}

/// Draws the command trigger when shown, plus its tooltip. The idle pulse
/// alternates the border weight.
pub fn render_command_trigger(
    f: &mut Frame,
    area: Rect,
    trigger: &FloatingTrigger,
    tooltip: &Tooltip,
    now: Instant,
    reduced_motion: bool,
    theme: &Theme,
) {
    if !trigger.is_shown() {
        return;
    }
    let rect = command_trigger_rect(area);
    let mut style = faded(
        Style::default().fg(theme.accent).bg(theme.surface),
        trigger.opacity(now, reduced_motion),
    );
    if trigger.animation_frame(now, reduced_motion) == 1 || tooltip.is_hovered() {
        style = style.add_modifier(Modifier::BOLD);
    }

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(COMMAND_MENU_HINT)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        rect,
    );

    if tooltip.is_visible() {
        let text = Tooltip::text();
        let width = button_width(&text).min(area.width);
        let tip = Rect {
            x: (rect.x + rect.width).saturating_sub(width).max(area.x),
            y: rect.y.saturating_sub(BUTTON_HEIGHT).max(area.y),
            width,
            height: BUTTON_HEIGHT.min(area.height),
        };
        f.render_widget(Clear, tip);
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text).bg(theme.highlight_bg))
                .block(Block::default().borders(Borders::ALL)),
            tip,
        );
    }
}
