//! Command palette: static commands, query filter, selection and deferred close.
//!
//! The palette only decides *which* action runs. Executing it needs the
//! platform and the page, so the palette emits [`PaletteEvent::Execute`]
//! and the app reports back by scheduling the close.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::models::{Icon, UserData};
use crate::timers::Deadline;

use super::Anchor;

/// How long "Copied to clipboard" stays before the palette closes.
pub const COPY_CONFIRMATION_DWELL: Duration = Duration::from_millis(1500);

/// Close delay after a scroll-to-section command.
pub const SCROLL_CLOSE_DELAY: Duration = Duration::from_millis(180);

/// Close delay after every other command.
pub const ACTION_CLOSE_DELAY: Duration = Duration::from_millis(150);

/// What a command does when executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Copy the owner's email to the clipboard
    CopyEmail,
    /// Open an external URL
    OpenLink(String),
    /// Scroll the page to a section
    ScrollTo(Anchor),
    /// Save the résumé to the downloads folder
    DownloadResume,
    /// Switch between light and dark
    ToggleTheme,
}

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Leading icon
    pub icon: Icon,
    /// Extra search terms
    pub keywords: Vec<String>,
    /// Action to run
    pub action: CommandAction,
}

impl CommandItem {
    fn new(id: &str, name: impl Into<String>, icon: Icon, keywords: &[&str], action: CommandAction) -> Self {
        Self {
            id: id.to_string(),
            name: name.into(),
            icon,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            action,
        }
    }

    /// Whether every whitespace-separated token of `query` occurs in the
    /// name or keywords, ignoring case.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let haystack = format!("{} {}", self.name, self.keywords.join(" ")).to_lowercase();
        query
            .split_whitespace()
            .all(|token| haystack.contains(&token.to_lowercase()))
    }
}

/// A titled group of commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup {
    /// Group heading
    pub heading: String,
    /// Commands in display order
    pub items: Vec<CommandItem>,
}

/// A group after filtering; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView<'a> {
    /// Group heading
    pub heading: &'a str,
    /// Matching commands
    pub items: Vec<&'a CommandItem>,
}

/// The fixed command set for a résumé owner.
#[must_use]
pub fn default_commands(user: &UserData) -> Vec<CommandGroup> {
    let resume = CommandGroup {
        heading: "Resume".to_string(),
        items: vec![
            CommandItem::new(
                "download-resume",
                "Download Resume",
                Icon::Download,
                &["cv", "pdf", "download", "save"],
                CommandAction::DownloadResume,
            ),
            CommandItem::new(
                "copy-email",
                "Copy Email",
                Icon::Mail,
                &["email", "contact", "clipboard", "copy"],
                CommandAction::CopyEmail,
            ),
        ],
    };

    let navigate = CommandGroup {
        heading: "Navigate".to_string(),
        items: vec![
            CommandItem::new(
                "nav-top",
                "Go to Top",
                Icon::Home,
                &["home", "header", "about", "intro"],
                CommandAction::ScrollTo(Anchor::Top),
            ),
            CommandItem::new(
                "nav-timeline",
                "Go to Experience",
                Icon::Briefcase,
                &["timeline", "work", "jobs", "career", "history"],
                CommandAction::ScrollTo(Anchor::Timeline),
            ),
            CommandItem::new(
                "nav-skills",
                "Go to Skills",
                Icon::Star,
                &["skills", "expertise", "abilities"],
                CommandAction::ScrollTo(Anchor::Skills),
            ),
            CommandItem::new(
                "nav-end",
                "Go to Contact",
                Icon::Mail,
                &["footer", "end", "bottom", "contact"],
                CommandAction::ScrollTo(Anchor::End),
            ),
        ],
    };

    let mut contact_items = vec![CommandItem::new(
        "contact-email",
        "Send Email",
        Icon::Mail,
        &["email", "mail", "message", "contact"],
        CommandAction::OpenLink(format!("mailto:{}", user.email)),
    )];
    contact_items.extend(user.social.iter().map(|link| {
        let id = format!("social-{}", link.label.to_lowercase().replace(' ', "-"));
        CommandItem::new(
            &id,
            format!("Open {}", link.label),
            link.icon,
            &["social", "profile", "link"],
            CommandAction::OpenLink(link.url.clone()),
        )
    }));
    let contact = CommandGroup {
        heading: "Contact".to_string(),
        items: contact_items,
    };

    let preferences = CommandGroup {
        heading: "Preferences".to_string(),
        items: vec![CommandItem::new(
            "toggle-theme",
            "Toggle Theme",
            Icon::Moon,
            &["dark", "light", "mode", "appearance", "theme"],
            CommandAction::ToggleTheme,
        )],
    };

    vec![resume, navigate, contact, preferences]
}

/// Something the app must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// Run this action
    Execute(CommandAction),
    /// Close the palette now
    Close,
}

/// Palette state for one opening of the command menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPalette {
    groups: Vec<CommandGroup>,
    query: String,
    selected: usize,
    confirmation: Option<String>,
    close: Deadline,
}

impl CommandPalette {
    /// Creates a palette with an empty query and the first command selected.
    #[must_use]
    pub const fn new(groups: Vec<CommandGroup>) -> Self {
        Self {
            groups,
            query: String::new(),
            selected: 0,
            confirmation: None,
            close: Deadline::idle(),
        }
    }

    /// The current query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Index of the selected command in [`CommandPalette::visible_items`].
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Confirmation text shown after a command ran.
    #[must_use]
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    /// Groups with at least one matching command.
    #[must_use]
    pub fn filtered(&self) -> Vec<GroupView<'_>> {
        self.groups
            .iter()
            .filter_map(|group| {
                let items: Vec<&CommandItem> = group
                    .items
                    .iter()
                    .filter(|item| item.matches(&self.query))
                    .collect();
                (!items.is_empty()).then_some(GroupView {
                    heading: &group.heading,
                    items,
                })
            })
            .collect()
    }

    /// Matching commands flattened in display order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&CommandItem> {
        self.filtered()
            .into_iter()
            .flat_map(|group| group.items)
            .collect()
    }

    /// The selected command, if anything matches.
    #[must_use]
    pub fn selected_item(&self) -> Option<&CommandItem> {
        self.visible_items().get(self.selected).copied()
    }

    /// Moves the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        let count = self.visible_items().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let count = self.visible_items().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Selects a visible command by index (mouse hover). Out of range is ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.visible_items().len() {
            self.selected = index;
        }
    }

    /// Appends to the query and resets the selection.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    /// Deletes the last query character and resets the selection.
    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    /// Action of the selected command.
    #[must_use]
    pub fn execute_selected(&self) -> Option<PaletteEvent> {
        self.selected_item()
            .map(|item| PaletteEvent::Execute(item.action.clone()))
    }

    /// Handles a key press.
    ///
    /// Once a close is scheduled only Escape is honored.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PaletteEvent> {
        if key.code == KeyCode::Esc {
            return Some(PaletteEvent::Close);
        }
        if self.is_closing() {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => self.execute_selected(),
            KeyCode::Up => {
                self.select_previous();
                None
            }
            KeyCode::Down => {
                self.select_next();
                None
            }
            KeyCode::Char('p') if ctrl => {
                self.select_previous();
                None
            }
            KeyCode::Char('n') if ctrl => {
                self.select_next();
                None
            }
            KeyCode::Backspace => {
                self.pop_char();
                None
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.push_char(c);
                None
            }
            _ => None,
        }
    }

    /// Shows a confirmation message until the palette closes.
    pub fn show_confirmation(&mut self, message: impl Into<String>) {
        self.confirmation = Some(message.into());
    }

    /// Schedules the close, replacing any earlier schedule.
    pub fn schedule_close(&mut self, now: Instant, delay: Duration) {
        self.close.arm(now, delay);
    }

    /// Whether a close is scheduled.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        self.close.is_pending()
    }

    /// Returns `true` once the scheduled close is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.close.fire(now)
    }
}
