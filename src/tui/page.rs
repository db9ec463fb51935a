//! Page layout: header, experience timeline, skills and footer.
//!
//! [`build_page`] is a pure function of `AppState` and the viewport size.
//! The header fills the first screen, so the timeline always starts below
//! the fold.
//! Besides the styled lines it records where each anchor, timeline card,
//! skill row and filter chip landed, which is what scrolling, mouse hit
//! testing and viewport intersection work from.

use chrono::Datelike;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::branding::COMMAND_MENU_HINT;
use crate::controllers::skills_filter::CHIPS;
use crate::controllers::{get_year_range, Anchor, CategorizedSkill};
use crate::models::{ExperienceEntry, Icon, Side};

use super::{AppState, FocusArea, Theme};

/// Below this width the timeline collapses to a single column.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 60;

/// Content never grows wider than this.
const MAX_CONTENT_WIDTH: u16 = 100;

/// Width of the rail segment between the two timeline columns.
const RAIL_WIDTH: usize = 5;

/// A timeline card on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpan {
    /// Entry id
    pub id: String,
    /// Page lines covered by the card
    pub lines: Range<u16>,
    /// Columns covered by the card and its rail icon
    pub columns: Range<u16>,
    /// Column of the rail icon on the first card line
    pub icon_column: u16,
}

/// A filter chip on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSpan {
    /// Index into [`CHIPS`]
    pub chip: usize,
    /// Page line
    pub line: u16,
    /// Columns covered
    pub columns: Range<u16>,
}

/// A skill row on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRowSpan {
    /// Skill id
    pub id: String,
    /// Page line
    pub line: u16,
}

/// The laid-out page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Styled lines, one per terminal row
    pub lines: Vec<Line<'static>>,
    /// Timeline cards in display order
    pub entries: Vec<EntrySpan>,
    /// Visible skill rows in display order
    pub skill_rows: Vec<SkillRowSpan>,
    /// Filter chips
    pub chips: Vec<ChipSpan>,
    sections: Vec<(Anchor, Range<u16>)>,
}

impl Page {
    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> u16 {
        to_line(self.lines.len())
    }

    /// Lines covered by a section; `None` when the section is not on the page.
    #[must_use]
    pub fn section_range(&self, anchor: Anchor) -> Option<Range<u16>> {
        self.sections
            .iter()
            .find(|(a, _)| *a == anchor)
            .map(|(_, range)| range.clone())
    }

    /// First line of a section; `None` when the section is not on the page.
    #[must_use]
    pub fn anchor_offset(&self, anchor: Anchor) -> Option<u16> {
        self.section_range(anchor).map(|range| range.start)
    }

    /// Largest useful scroll offset for a viewport of `viewport_height` lines.
    #[must_use]
    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.height().saturating_sub(viewport_height)
    }

    /// Card of an entry.
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&EntrySpan> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Card under a page position.
    #[must_use]
    pub fn entry_at(&self, line: u16, column: u16) -> Option<&EntrySpan> {
        self.entries
            .iter()
            .find(|entry| entry.lines.contains(&line) && entry.columns.contains(&column))
    }

    /// Chip under a page position.
    #[must_use]
    pub fn chip_at(&self, line: u16, column: u16) -> Option<usize> {
        self.chips
            .iter()
            .find(|chip| chip.line == line && chip.columns.contains(&column))
            .map(|chip| chip.chip)
    }

    /// Plain text of the page, one line per row.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Glyph drawn for an icon kind. Always one column wide.
#[must_use]
pub const fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Briefcase => "▪",
        Icon::Brain => "◉",
        Icon::Rocket => "▲",
        Icon::Code => "λ",
        Icon::Users => "☺",
        Icon::Chart => "▤",
        Icon::Cloud => "◌",
        Icon::Database => "▥",
        Icon::Compass => "✦",
        Icon::Mail => "@",
        Icon::Link => "↗",
        Icon::Github => "◆",
        Icon::Linkedin => "▣",
        Icon::Twitter => "✕",
        Icon::Download => "↓",
        Icon::Sun => "☼",
        Icon::Moon => "☾",
        Icon::Home => "⌂",
        Icon::Star => "★",
        Icon::Terminal => "›",
    }
}

/// Lays out the page for the current state.
#[must_use]
pub fn build_page(state: &AppState, width: u16) -> Page {
    let mut builder = PageBuilder::new(state.theme(), width);

    let start = builder.line_no();
    builder.header(state);
    builder.fill_screen(start, state.viewport_height());
    builder.section(Anchor::Top, start);

    if !state.resume.experience.is_empty() {
        let start = builder.line_no();
        builder.timeline(state);
        builder.section(Anchor::Timeline, start);
    }

    if !state.resume.skills.is_empty() {
        let start = builder.line_no();
        builder.skills(state);
        builder.section(Anchor::Skills, start);
    }

    let start = builder.line_no();
    builder.footer(state);
    builder.section(Anchor::End, start);

    builder.page
}

/// One card line made of styled segments.
type Segments = Vec<(String, Style)>;

struct PageBuilder<'a> {
    theme: &'a Theme,
    margin: usize,
    content_width: usize,
    wide: bool,
    page: Page,
}

impl<'a> PageBuilder<'a> {
    fn new(theme: &'a Theme, width: u16) -> Self {
        let content_width = width.saturating_sub(4).min(MAX_CONTENT_WIDTH).max(10);
        let margin = width.saturating_sub(content_width) / 2;
        Self {
            theme,
            margin: usize::from(margin),
            content_width: usize::from(content_width),
            wide: width >= WIDE_LAYOUT_MIN_WIDTH,
            page: Page::default(),
        }
    }

    fn line_no(&self) -> u16 {
        self.page.height()
    }

    fn section(&mut self, anchor: Anchor, start: u16) {
        let end = self.line_no();
        self.page.sections.push((anchor, start..end));
    }

    fn column(&self, offset: usize) -> u16 {
        to_line(self.margin + offset)
    }

    fn push(&mut self, segments: Segments) {
        let mut spans = vec![Span::raw(" ".repeat(self.margin))];
        spans.extend(pad_segments(segments, self.content_width));
        self.page.lines.push(Line::from(spans));
    }

    fn push_text(&mut self, text: impl Into<String>, style: Style) {
        self.push(vec![(text.into(), style)]);
    }

    fn push_wrapped(&mut self, text: &str, style: Style) {
        for line in wrap(text, self.content_width) {
            self.push_text(line, style);
        }
    }

    fn blank(&mut self) {
        self.page.lines.push(Line::default());
    }

    /// Pads the block that began at `start` to `height` lines, a third of
    /// the slack above it and the rest below.
    fn fill_screen(&mut self, start: u16, height: u16) {
        let slack = usize::from(height.saturating_sub(self.line_no() - start));
        let above = slack / 3;
        let block = self.page.lines.split_off(usize::from(start));
        self.page
            .lines
            .extend(std::iter::repeat_with(Line::default).take(above));
        self.page.lines.extend(block);
        for _ in above..slack {
            self.blank();
        }
    }

    fn heading(&mut self, title: &str) {
        let label = format!("── {title} ");
        let rule = "─".repeat(self.content_width.saturating_sub(label.width()));
        self.push_text(
            format!("{label}{rule}"),
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn header(&mut self, state: &AppState) {
        let user = &state.resume.user;
        let theme = self.theme;

        self.blank();
        self.push_text(
            user.name.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );
        self.push_text(user.title.clone(), Style::default().fg(theme.text_secondary));

        let contact = if user.location.is_empty() {
            user.email.clone()
        } else {
            format!("{} · {}", user.location, user.email)
        };
        self.push_text(contact, Style::default().fg(theme.text_muted));
        self.blank();
        self.push_wrapped(&user.bio, Style::default().fg(theme.text));

        if !user.social.is_empty() {
            self.blank();
            let mut segments = Segments::new();
            for (i, link) in user.social.iter().enumerate() {
                if i > 0 {
                    segments.push(("   ".to_string(), Style::default()));
                }
                segments.push((
                    format!("{} {}", icon_glyph(link.icon), link.label),
                    Style::default().fg(theme.accent),
                ));
            }
            self.push(segments);
        }
        self.blank();
    }

    fn timeline(&mut self, state: &AppState) {
        let theme = self.theme;
        self.heading("Experience");
        self.push_text(
            "Tab focus · ↑/↓ move · Enter expand · Esc collapse",
            Style::default().fg(theme.text_muted),
        );
        self.blank();

        let timeline_focused = state.focus == FocusArea::Timeline;
        for (index, entry) in state.resume.experience.iter().enumerate() {
            let expanded = state.timeline.is_expanded(&entry.id);
            let focused = timeline_focused && state.timeline.focused() == index;
            self.entry(entry, Side::for_index(index), expanded, focused);
            self.blank();
        }
    }

    fn entry(&mut self, entry: &ExperienceEntry, side: Side, expanded: bool, focused: bool) {
        let theme = self.theme;
        let (left_width, right_width) = if self.wide {
            let left = (self.content_width - RAIL_WIDTH) / 2;
            (left, self.content_width - RAIL_WIDTH - left)
        } else {
            (0, self.content_width.saturating_sub(3))
        };
        let card_width = match (self.wide, side) {
            (true, Side::Left) => left_width.saturating_sub(1),
            (true, Side::Right) | (false, _) => right_width.saturating_sub(1),
        };

        let card = card_lines(theme, entry, expanded, card_width);

        let icon_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else if expanded {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.primary)
        };
        let rail_style = Style::default().fg(theme.rail);
        let glyph = icon_glyph(entry.icon);

        let start = self.line_no();
        for (k, segments) in card.into_iter().enumerate() {
            let rail: Segments = match (self.wide, k == 0) {
                (true, true) => vec![
                    (" (".to_string(), rail_style),
                    (glyph.to_string(), icon_style),
                    (") ".to_string(), rail_style),
                ],
                (true, false) => vec![("  │  ".to_string(), rail_style)],
                (false, true) => vec![
                    ("(".to_string(), rail_style),
                    (glyph.to_string(), icon_style),
                    (") ".to_string(), rail_style),
                ],
                (false, false) => vec![(" │ ".to_string(), rail_style)],
            };

            let mut line = Segments::new();
            match (self.wide, side) {
                (true, Side::Left) => {
                    line.extend(pad_segments_owned(segments, left_width.saturating_sub(1)));
                    line.push((" ".to_string(), Style::default()));
                    line.extend(rail);
                }
                (true, Side::Right) => {
                    line.push((" ".repeat(left_width), Style::default()));
                    line.extend(rail);
                    line.push((" ".to_string(), Style::default()));
                    line.extend(segments);
                }
                (false, _) => {
                    line.extend(rail);
                    line.extend(segments);
                }
            }
            self.push(line);
        }
        let end = self.line_no();

        let (columns, icon_offset) = match (self.wide, side) {
            (true, Side::Left) => (0..left_width + RAIL_WIDTH, left_width + 2),
            (true, Side::Right) => (left_width..self.content_width, left_width + 2),
            (false, _) => (0..self.content_width, 1),
        };
        self.page.entries.push(EntrySpan {
            id: entry.id.clone(),
            lines: start..end,
            columns: self.column(columns.start)..self.column(columns.end),
            icon_column: self.column(icon_offset),
        });
    }

    fn skills(&mut self, state: &AppState) {
        let theme = self.theme;
        let filter = &state.skills;
        let reduced = state.motion.reduced();

        self.heading("Skills");
        self.blank();

        // Filter chips
        let chip_line = self.line_no();
        let chips_focused = state.focus == FocusArea::Skills;
        let mut segments = Segments::new();
        let mut offset = 0;
        for (index, chip) in CHIPS.into_iter().enumerate() {
            let (label, count) = match chip {
                Some(category) => (category.label(), filter.count(category)),
                None => ("All", filter.total()),
            };
            let text = format!("[ {label} {count} ]");
            let width = text.width();

            let mut style = if filter.active() == chip {
                let bg = chip.map_or(theme.accent, |category| theme.category_color(category));
                Style::default()
                    .fg(theme.background)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            if chips_focused && filter.chip_focus() == index {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }

            if index > 0 {
                segments.push((" ".to_string(), Style::default()));
                offset += 1;
            }
            self.page.chips.push(ChipSpan {
                chip: index,
                line: chip_line,
                columns: self.column(offset)..self.column(offset + width),
            });
            segments.push((text, style));
            offset += width;
        }
        self.push(segments);
        self.push_text(
            "1 AI & ML · 2 Technical · 3 Leadership · 0 All",
            Style::default().fg(theme.text_muted),
        );
        self.blank();

        let visible = filter.filtered();
        if visible.is_empty() {
            self.push_text("No skills in this category", Style::default().fg(theme.text_muted));
        }
        let name_width = (self.content_width / 3).clamp(8, 28);
        let bar_width = self
            .content_width
            .saturating_sub(name_width + 2 + 6 + 14)
            .clamp(5, 30);
        for skill in visible {
            let ratio = filter.reveal().fill_ratio(&skill.skill.id, state.now, reduced);
            let line = self.line_no();
            self.skill_row(skill, ratio, name_width, bar_width);
            self.page.skill_rows.push(SkillRowSpan {
                id: skill.skill.id.clone(),
                line,
            });
        }
        self.blank();
    }

    fn skill_row(&mut self, skill: &CategorizedSkill, ratio: f32, name_width: usize, bar_width: usize) {
        let theme = self.theme;
        let color = theme.category_color(skill.category);
        let level = f32::from(skill.skill.level) * ratio;
        #[allow(clippy::cast_precision_loss)]
        let filled = ((bar_width as f32) * level / 100.0).round() as usize;
        let shown = level.round() as u8;

        let glyph = skill.skill.icon.map_or("·", icon_glyph);
        self.push(vec![
            (format!("{glyph} "), Style::default().fg(color)),
            (fit(&skill.skill.name, name_width), Style::default().fg(theme.text)),
            (" ".to_string(), Style::default()),
            ("█".repeat(filled.min(bar_width)), Style::default().fg(color)),
            (
                "░".repeat(bar_width.saturating_sub(filled)),
                Style::default().fg(theme.bar_empty),
            ),
            (format!(" {shown:>3}% "), Style::default().fg(theme.text_secondary)),
            (
                skill.level().name().to_string(),
                Style::default().fg(theme.text_muted),
            ),
        ]);
    }

    fn footer(&mut self, state: &AppState) {
        let theme = self.theme;
        let user = &state.resume.user;

        self.heading("Contact");
        self.blank();
        self.push(vec![
            ("@ ".to_string(), Style::default().fg(theme.text_muted)),
            (user.email.clone(), Style::default().fg(theme.accent)),
        ]);
        for link in &user.social {
            self.push(vec![
                (
                    format!("{} {}: ", icon_glyph(link.icon), link.label),
                    Style::default().fg(theme.text_muted),
                ),
                (link.url.clone(), Style::default().fg(theme.text_secondary)),
            ]);
        }
        if let Some(url) = &user.resume_url {
            self.push(vec![
                ("↓ Résumé: ".to_string(), Style::default().fg(theme.text_muted)),
                (url.clone(), Style::default().fg(theme.text_secondary)),
            ]);
        }
        self.blank();
        self.push_text(
            format!("Press {COMMAND_MENU_HINT} to open the command menu"),
            Style::default().fg(theme.text_muted),
        );
        self.push_text(
            format!("© {} {}", chrono::Local::now().year(), user.name),
            Style::default().fg(theme.text_muted),
        );
        self.blank();
    }
}

/// Card content for one timeline entry, each line at most `width` wide.
fn card_lines(theme: &Theme, entry: &ExperienceEntry, expanded: bool, width: usize) -> Vec<Segments> {
    let mut lines: Vec<Segments> = Vec::new();
    let wrapped = |lines: &mut Vec<Segments>, text: &str, style: Style| {
        for line in wrap(text, width) {
            lines.push(vec![(line, style)]);
        }
    };

    lines.push(vec![(
        get_year_range(&entry.date),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )]);
    wrapped(
        &mut lines,
        &entry.title,
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    );
    wrapped(
        &mut lines,
        &format!("{} · {}", entry.company, entry.date),
        Style::default().fg(theme.text_secondary),
    );
    wrapped(&mut lines, &entry.description, Style::default().fg(theme.text));

    let label = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.text_muted);

    if expanded {
        if !entry.location.is_empty() {
            wrapped(&mut lines, &format!("Location: {}", entry.location), muted);
        }
        if !entry.achievements.is_empty() {
            lines.push(vec![("Achievements".to_string(), label)]);
            for achievement in &entry.achievements {
                wrapped(&mut lines, &format!("• {achievement}"), Style::default().fg(theme.text));
            }
        }
        if !entry.technologies.is_empty() {
            lines.push(vec![("Technologies".to_string(), label)]);
            wrapped(
                &mut lines,
                &entry.technologies.join(", "),
                Style::default().fg(theme.accent),
            );
        }
        if !entry.projects.is_empty() {
            lines.push(vec![("Projects".to_string(), label)]);
            for project in &entry.projects {
                wrapped(
                    &mut lines,
                    &format!("▸ {}: {}", project.name, project.description),
                    Style::default().fg(theme.text),
                );
            }
        }
        lines.push(vec![("[-] hide details".to_string(), muted)]);
    } else {
        lines.push(vec![("[+] show details".to_string(), muted)]);
    }

    lines
}

fn to_line(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Word-wraps `text` to `width` display columns. Words longer than a line are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncates with `…` or pads with spaces to exactly `width` columns.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{text}{}", " ".repeat(width - text.width()));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Truncates segments to `width` and pads the remainder.
fn pad_segments_owned(segments: Segments, width: usize) -> Segments {
    let mut out = Segments::new();
    let mut used = 0;
    for (text, style) in segments {
        if used >= width {
            break;
        }
        let text_width = text.width();
        if used + text_width <= width {
            used += text_width;
            out.push((text, style));
        } else {
            let mut clipped = String::new();
            for ch in text.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if used + ch_width > width {
                    break;
                }
                clipped.push(ch);
                used += ch_width;
            }
            out.push((clipped, style));
            break;
        }
    }
    if used < width {
        out.push((" ".repeat(width - used), Style::default()));
    }
    out
}

fn pad_segments(segments: Segments, width: usize) -> Vec<Span<'static>> {
    pad_segments_owned(segments, width)
        .into_iter()
        .map(|(text, style)| Span::styled(text, style))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("one two three", 7), ["one two", "three"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
        assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert!(wrap("anything", 0).is_empty());
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abcdef", 0), "");
    }

    #[test]
    fn test_pad_segments_clips_and_pads() {
        let style = Style::default();
        let out = pad_segments_owned(vec![("abc".to_string(), style), ("def".to_string(), style)], 4);
        let text: String = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(text, "abcd");

        let out = pad_segments_owned(vec![("ab".to_string(), style)], 4);
        let text: String = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(text, "ab  ");
    }

    #[test]
    fn test_icon_glyphs_are_single_width() {
        for icon in [
            Icon::Briefcase,
            Icon::Brain,
            Icon::Rocket,
            Icon::Code,
            Icon::Users,
            Icon::Chart,
            Icon::Cloud,
            Icon::Database,
            Icon::Compass,
            Icon::Mail,
            Icon::Link,
            Icon::Github,
            Icon::Linkedin,
            Icon::Twitter,
            Icon::Download,
            Icon::Sun,
            Icon::Moon,
            Icon::Home,
            Icon::Star,
            Icon::Terminal,
        ] {
            assert_eq!(icon_glyph(icon).width(), 1, "{icon:?}");
        }
    }
}
