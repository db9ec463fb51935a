//! Icon kinds referenced by résumé entries, skills and commands.
//!
//! The core only needs to know that an icon exists; glyphs are chosen by the
//! presentation layer.

use serde::{Deserialize, Serialize};

/// A known icon kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Generic job / role
    #[default]
    Briefcase,
    /// AI, ML, research
    Brain,
    /// Launches, startups
    Rocket,
    /// Engineering
    Code,
    /// People and teams
    Users,
    /// Analytics, growth
    Chart,
    /// Cloud and infrastructure
    Cloud,
    /// Data work
    Database,
    /// Strategy, direction
    Compass,
    /// Email address
    Mail,
    /// Generic external link
    Link,
    /// GitHub profile
    Github,
    /// LinkedIn profile
    Linkedin,
    /// X / Twitter profile
    Twitter,
    /// File download
    Download,
    /// Light theme
    Sun,
    /// Dark theme
    Moon,
    /// Top of the page
    Home,
    /// Highlight
    Star,
    /// Command line
    Terminal,
}
