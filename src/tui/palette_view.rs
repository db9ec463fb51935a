//! Command palette popup.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::controllers::{CommandItem, CommandPalette, PaletteEvent};
use crate::tui::component::Component;
use crate::tui::page::icon_glyph;
use crate::tui::Theme;

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 20;
const CLOSE_BUTTON: &str = "[x]";

/// Screen regions of the palette popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    /// Whole popup including the border
    pub popup: Rect,
    /// Query input row
    pub input: Rect,
    /// Command list
    pub list: Rect,
    /// Confirmation / hint row
    pub footer: Rect,
    /// The `[x]` in the title bar
    pub close_button: Rect,
}

/// Computes the popup regions for a frame area.
#[must_use]
pub fn palette_layout(area: Rect) -> PaletteLayout {
    let width = POPUP_WIDTH.min(area.width.saturating_sub(4)).max(20.min(area.width));
    let height = POPUP_HEIGHT.min(area.height.saturating_sub(2)).max(6.min(area.height));
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 3,
        width,
        height,
    };

    let inner = Rect {
        x: popup.x + 1,
        y: popup.y + 1,
        width: popup.width.saturating_sub(2),
        height: popup.height.saturating_sub(2),
    };
    let input = Rect { height: 1.min(inner.height), ..inner };
    let list = Rect {
        y: inner.y + 2,
        height: inner.height.saturating_sub(3),
        ..inner
    };
    let footer = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1.min(inner.height),
        ..inner
    };
    let close_button = Rect {
        x: popup.x + popup.width.saturating_sub(5),
        y: popup.y,
        width: 3,
        height: 1,
    };

    PaletteLayout {
        popup,
        input,
        list,
        footer,
        close_button,
    }
}

/// One row of the command list.
enum Row<'a> {
    Heading(&'a str),
    Item(usize, &'a CommandItem),
}

impl CommandPalette {
    fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();
        let mut index = 0;
        for group in self.filtered() {
            rows.push(Row::Heading(group.heading));
            for item in group.items {
                rows.push(Row::Item(index, item));
                index += 1;
            }
        }
        rows
    }

    /// First row drawn so the selected item stays inside `height` rows.
    fn first_row(rows: &[Row<'_>], selected: usize, height: usize) -> usize {
        let selected_row = rows
            .iter()
            .position(|row| matches!(row, Row::Item(i, _) if *i == selected))
            .unwrap_or(0);
        if height == 0 || selected_row < height {
            0
        } else {
            selected_row + 1 - height
        }
    }

    /// Index of the item under a screen position, if any.
    #[must_use]
    pub fn item_at(&self, layout: &PaletteLayout, column: u16, row: u16) -> Option<usize> {
        let list = layout.list;
        if column < list.x || column >= list.x + list.width || row < list.y || row >= list.y + list.height {
            return None;
        }
        let rows = self.rows();
        let first = Self::first_row(&rows, self.selected(), usize::from(list.height));
        match rows.get(first + usize::from(row - list.y)) {
            Some(Row::Item(index, _)) => Some(*index),
            _ => None,
        }
    }
}

/// Whether a screen position is on the popup's close button.
#[must_use]
pub fn is_close_button(layout: &PaletteLayout, column: u16, row: u16) -> bool {
    let button = layout.close_button;
    row == button.y && column >= button.x && column < button.x + button.width
}

/// Whether a screen position is inside the popup.
#[must_use]
pub fn contains(layout: &PaletteLayout, column: u16, row: u16) -> bool {
    let popup = layout.popup;
    column >= popup.x && column < popup.x + popup.width && row >= popup.y && row < popup.y + popup.height
}

impl Component for CommandPalette {
    type Event = PaletteEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        self.handle_key(key)
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let layout = palette_layout(area);

        f.render_widget(Clear, layout.popup);
        let block = Block::default()
            .title(" Command Menu ")
            .title_top(Line::from(format!("{CLOSE_BUTTON} ")).right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));
        f.render_widget(block, layout.popup);

        // Query input
        let input = if self.query().is_empty() {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme.accent)),
                Span::styled(
                    "Type a command or search...",
                    Style::default().fg(theme.text_muted),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme.accent)),
                Span::styled(self.query().to_string(), Style::default().fg(theme.text)),
                Span::styled("█", Style::default().fg(theme.accent)),
            ])
        };
        f.render_widget(Paragraph::new(input), layout.input);

        // Command list
        let rows = self.rows();
        if rows.is_empty() {
            f.render_widget(
                Paragraph::new("No results found.")
                    .style(Style::default().fg(theme.text_muted))
                    .alignment(Alignment::Center),
                layout.list,
            );
        } else {
            let first = Self::first_row(&rows, self.selected(), usize::from(layout.list.height));
            let items: Vec<ListItem> = rows
                .iter()
                .skip(first)
                .map(|row| match row {
                    Row::Heading(heading) => ListItem::new(Line::from(Span::styled(
                        (*heading).to_string(),
                        Style::default()
                            .fg(theme.text_muted)
                            .add_modifier(Modifier::BOLD),
                    ))),
                    Row::Item(index, item) => {
                        let style = if *index == self.selected() {
                            Style::default()
                                .fg(theme.text)
                                .bg(theme.highlight_bg)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(theme.text)
                        };
                        ListItem::new(Line::from(vec![
                            Span::styled(
                                format!("  {} ", icon_glyph(item.icon)),
                                style.fg(theme.accent),
                            ),
                            Span::styled(item.name.clone(), style),
                        ]))
                    }
                })
                .collect();
            f.render_widget(List::new(items), layout.list);
        }

        // Confirmation or hint
        let footer = match self.confirmation() {
            Some(message) => Span::styled(
                format!("✓ {message}"),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                "↑↓ navigate · Enter select · Esc close",
                Style::default().fg(theme.text_muted),
            ),
        };
        f.render_widget(Paragraph::new(Line::from(footer)), layout.footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::default_commands;
    use crate::models::UserData;

    fn palette() -> CommandPalette {
        let user = UserData {
            name: "Sam".to_string(),
            title: "Engineer".to_string(),
            bio: String::new(),
            email: "sam@example.com".to_string(),
            location: String::new(),
            resume_url: None,
            social: Vec::new(),
        };
        CommandPalette::new(default_commands(&user))
    }

    #[test]
    fn test_layout_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = palette_layout(area);
        assert!(layout.popup.width <= area.width);
        assert!(layout.popup.height <= area.height);
        assert_eq!(layout.close_button.y, layout.popup.y);
        assert!(contains(&layout, layout.list.x, layout.list.y));
        assert!(!contains(&layout, 0, 0));
    }

    #[test]
    fn test_close_button_hit() {
        let layout = palette_layout(Rect::new(0, 0, 100, 30));
        let button = layout.close_button;
        assert!(is_close_button(&layout, button.x + 1, button.y));
        assert!(!is_close_button(&layout, button.x + 1, button.y + 1));
    }

    #[test]
    fn test_item_at_skips_headings() {
        let palette = palette();
        let layout = palette_layout(Rect::new(0, 0, 100, 30));

        // First row is the "Resume" heading, second the first item
        assert_eq!(palette.item_at(&layout, layout.list.x, layout.list.y), None);
        assert_eq!(palette.item_at(&layout, layout.list.x, layout.list.y + 1), Some(0));
        assert_eq!(palette.item_at(&layout, layout.list.x, layout.list.y + 2), Some(1));
        // Outside the list
        assert_eq!(palette.item_at(&layout, 0, 0), None);
    }
}
