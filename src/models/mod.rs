//! Data models for the résumé content.
//!
//! Models are plain serde records, independent of UI state.

pub mod experience;
pub mod icon;
pub mod profile;
pub mod resume;
pub mod skill;

// Re-export all model types
pub use experience::{ExperienceEntry, Project, Side};
pub use icon::Icon;
pub use profile::{SocialLink, UserData};
pub use resume::Resume;
pub use skill::{Skill, SkillCategory, SkillLevel};
