//! The résumé document: owner profile, experience and skills.
//!
//! Content is static for the lifetime of the app. The default document is
//! embedded at build time; `--resume` or `paths.resume` swaps in a TOML or
//! JSON file with the same schema.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::{ExperienceEntry, Skill, UserData};

/// Embedded default résumé
const EMBEDDED_RESUME: &str = include_str!("../data/resume.toml");

/// Complete résumé content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Owner profile
    pub user: UserData,
    /// Experience entries in display order
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    /// Skills in display order
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Resume {
    /// Loads the embedded default résumé.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_RESUME).context("Embedded résumé is invalid")
    }

    /// Loads a résumé file, choosing the format by extension (`.json` or TOML).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read résumé file: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let resume = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        resume.context(format!("Invalid résumé file: {}", path.display()))
    }

    /// Parses and validates TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let resume: Self = toml::from_str(content).context("Failed to parse résumé TOML")?;
        resume.validate()?;
        Ok(resume)
    }

    /// Parses and validates JSON content.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let resume: Self = serde_json::from_str(content).context("Failed to parse résumé JSON")?;
        resume.validate()?;
        Ok(resume)
    }

    /// Validates identifiers and levels.
    ///
    /// - experience and skill ids are non-empty and unique within their list
    /// - skill levels are at most 100
    /// - the owner name is non-empty
    pub fn validate(&self) -> Result<()> {
        if self.user.name.trim().is_empty() {
            anyhow::bail!("user.name must not be empty");
        }

        let mut seen = HashSet::new();
        for entry in &self.experience {
            if entry.id.trim().is_empty() {
                anyhow::bail!("Experience entry '{}' has an empty id", entry.title);
            }
            if !seen.insert(entry.id.as_str()) {
                anyhow::bail!("Duplicate experience id '{}'", entry.id);
            }
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            if skill.id.trim().is_empty() {
                anyhow::bail!("Skill '{}' has an empty id", skill.name);
            }
            if !seen.insert(skill.id.as_str()) {
                anyhow::bail!("Duplicate skill id '{}'", skill.id);
            }
            if skill.level > 100 {
                anyhow::bail!(
                    "Skill '{}' has level {}, expected 0-100",
                    skill.name,
                    skill.level
                );
            }
        }

        Ok(())
    }

    /// Looks up an experience entry by id.
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|entry| entry.id == id)
    }

    /// Renders the résumé as a Markdown document for export.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let user = &self.user;
        let mut out = String::new();

        let _ = writeln!(out, "# {}", user.name);
        let _ = writeln!(out);
        let _ = writeln!(out, "**{}**", user.title);
        if !user.location.is_empty() {
            let _ = writeln!(out, "{}", user.location);
        }
        let _ = writeln!(out, "{}", user.email);
        for link in &user.social {
            let _ = writeln!(out, "- {}: {}", link.label, link.url);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", user.bio);

        if !self.experience.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Experience");
            for entry in &self.experience {
                let _ = writeln!(out);
                let _ = writeln!(out, "### {} at {}", entry.title, entry.company);
                if entry.location.is_empty() {
                    let _ = writeln!(out, "*{}*", entry.date);
                } else {
                    let _ = writeln!(out, "*{}* · {}", entry.date, entry.location);
                }
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", entry.description);
                if !entry.achievements.is_empty() {
                    let _ = writeln!(out);
                    for achievement in &entry.achievements {
                        let _ = writeln!(out, "- {achievement}");
                    }
                }
                if !entry.technologies.is_empty() {
                    let _ = writeln!(out);
                    let _ = writeln!(out, "Technologies: {}", entry.technologies.join(", "));
                }
                for project in &entry.projects {
                    let _ = writeln!(out, "- **{}**: {}", project.name, project.description);
                }
            }
        }

        if !self.skills.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Skills");
            let _ = writeln!(out);
            for skill in &self.skills {
                let _ = writeln!(out, "- {} ({}%)", skill.name, skill.level);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[user]
name = "Sam Reyes"
title = "Engineer"
bio = "Builds things."
email = "sam@example.com"

[[experience]]
id = "exp-1"
title = "Staff Engineer"
company = "Initech"
date = "2019 - Present"
description = "Platform work."

[[skills]]
id = "rust"
name = "Rust"
level = 88
"#;

    #[test]
    fn test_embedded_resume_is_valid() {
        let resume = Resume::embedded().unwrap();
        assert!(!resume.user.name.is_empty());
        assert!(!resume.experience.is_empty());
        assert!(!resume.skills.is_empty());
    }

    #[test]
    fn test_minimal_toml_defaults() {
        let resume = Resume::from_toml_str(MINIMAL).unwrap();
        let entry = resume.entry("exp-1").unwrap();
        assert!(entry.achievements.is_empty());
        assert!(entry.location.is_empty());
        assert!(resume.user.social.is_empty());
        assert_eq!(resume.skills[0].icon, None);
    }

    #[test]
    fn test_duplicate_experience_id_rejected() {
        let doubled = format!(
            "{MINIMAL}\n[[experience]]\nid = \"exp-1\"\ntitle = \"Again\"\ncompany = \"X\"\ndate = \"2010\"\ndescription = \"d\"\n"
        );
        let err = Resume::from_toml_str(&doubled).unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate experience id"));
    }

    #[test]
    fn test_level_over_100_rejected() {
        let bad = MINIMAL.replace("level = 88", "level = 120");
        assert!(Resume::from_toml_str(&bad).is_err());
    }

    #[test]
    fn test_load_json_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resume.json");
        let resume = Resume::from_toml_str(MINIMAL).unwrap();
        fs::write(&path, serde_json::to_string(&resume).unwrap()).unwrap();

        let loaded = Resume::load(&path).unwrap();
        assert_eq!(loaded, resume);
    }

    #[test]
    fn test_markdown_export() {
        let resume = Resume::from_toml_str(MINIMAL).unwrap();
        let markdown = resume.to_markdown();
        assert!(markdown.starts_with("# Sam Reyes"));
        assert!(markdown.contains("### Staff Engineer at Initech"));
        assert!(markdown.contains("- Rust (88%)"));
    }
}
