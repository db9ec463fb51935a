//! Per-section UI controllers.
//!
//! Controllers own local interaction state (expanded entry, active filter,
//! palette query, button phases) and are driven by `AppState` with explicit
//! `Instant`s, which keeps them deterministic under test.

pub mod announcer;
pub mod command_palette;
pub mod floating_triggers;
pub mod scroll;
pub mod skills_filter;
pub mod timeline;
pub mod year_range;

pub use announcer::Announcer;
pub use command_palette::{
    default_commands, CommandAction, CommandGroup, CommandItem, CommandPalette, PaletteEvent,
};
pub use floating_triggers::{FloatingTrigger, Tooltip, TriggerEvent, TriggerKind, TriggerPhase};
pub use scroll::{Anchor, PageScroll};
pub use skills_filter::{categorize, categorize_all, CategorizedSkill, SkillsFilterController};
pub use timeline::{TimelineController, TimelineTransition};
pub use year_range::get_year_range;
