//! Owner profile: name, bio, contact details and social links.

use serde::{Deserialize, Serialize};

use super::Icon;

/// A link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display label ("GitHub")
    pub label: String,
    /// Absolute URL
    pub url: String,
    /// Icon kind
    #[serde(default = "default_link_icon")]
    pub icon: Icon,
}

const fn default_link_icon() -> Icon {
    Icon::Link
}

/// The portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Full name
    pub name: String,
    /// Headline role
    pub title: String,
    /// Short biography for the hero header
    pub bio: String,
    /// Contact email (copied by the command menu)
    pub email: String,
    /// Home base
    #[serde(default)]
    pub location: String,
    /// Public résumé link shown in the footer
    #[serde(default)]
    pub resume_url: Option<String>,
    /// External profiles
    #[serde(default)]
    pub social: Vec<SocialLink>,
}
