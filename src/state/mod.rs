//! Global UI state containers.
//!
//! Each container is the only writer of its flag and is owned by the
//! top-level `AppState`; nothing here is ambient or module-level.

pub mod command_menu;
pub mod preferences;
pub mod reduced_motion;
pub mod theme_store;
pub mod view_transition;

pub use command_menu::CommandMenuStore;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use reduced_motion::ReducedMotionObserver;
pub use theme_store::{ThemeMode, ThemeStore, THEME_KEY};
pub use view_transition::{ViewTransitionRunner, TRANSITION_DURATION};
