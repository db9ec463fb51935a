//! Branding and application identity configuration.
//!
//! Names, paths and hint strings used across the binary live here so the
//! application can be renamed in one place.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "termfolio";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "termfolio";

/// The directory name for application data (config, preferences, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "termfolio";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Interactive terminal portfolio";

/// File name of the log written while the UI owns the terminal.
pub const LOG_FILE_NAME: &str = "termfolio.log";

/// Hint shown wherever the command menu shortcut is advertised.
pub const COMMAND_MENU_HINT: &str = "Ctrl+K";

/// Builds the file name used when the résumé is exported for download.
///
/// `"Jordan Avery"` becomes `"jordan-avery-resume.md"`.
pub fn resume_file_name(owner: &str) -> String {
    let slug: String = owner
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "resume.md".to_string()
    } else {
        format!("{slug}-resume.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        // Ensure binary name is lowercase
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());

        // Ensure no spaces in binary name or data dir
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));

        assert!(LOG_FILE_NAME.ends_with(".log"));
    }

    #[test]
    fn test_resume_file_name() {
        assert_eq!(resume_file_name("Jordan Avery"), "jordan-avery-resume.md");
        assert_eq!(resume_file_name("  Zoë  O'Neil "), "zo-oneil-resume.md");
        assert_eq!(resume_file_name(""), "resume.md");
    }
}
