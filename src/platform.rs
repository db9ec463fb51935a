//! Host integration: clipboard, URL opener, downloads and OS preferences.
//!
//! Everything the UI needs from the outside world goes through the
//! [`Platform`] trait. Capabilities are probed once at startup into
//! [`Capabilities`] so call sites branch on plain booleans.

use anyhow::{Context, Result};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// URL schemes the opener accepts.
const ALLOWED_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Environment variables that request reduced motion.
const MOTION_ENV_VARS: [&str; 2] = ["REDUCE_MOTION", "NO_MOTION"];

/// The résumé file handed to [`Platform::save_resume`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeAsset {
    /// An existing file (e.g. a PDF) copied as-is.
    File(PathBuf),
    /// A document generated from the résumé content.
    Generated {
        /// Destination file name
        file_name: String,
        /// File contents
        contents: String,
    },
}

impl ResumeAsset {
    /// Name of the file as saved.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map_or_else(|| "resume".to_string(), |name| name.to_string_lossy().into_owned()),
            Self::Generated { file_name, .. } => file_name.clone(),
        }
    }
}

/// Side-effecting host operations.
pub trait Platform {
    /// Whether a system clipboard could be opened.
    fn clipboard_available(&self) -> bool;

    /// Whether the terminal can show transition frames.
    fn supports_transitions(&self) -> bool;

    /// OS dark-mode preference, `None` when unknown.
    fn os_prefers_dark(&self) -> Option<bool>;

    /// OS or environment reduced-motion preference, `None` when unknown.
    fn prefers_reduced_motion(&self) -> Option<bool>;

    /// Places text on the clipboard.
    fn copy_text(&mut self, text: &str) -> Result<()>;

    /// Opens a URL in the user's browser or mail client.
    fn open_url(&mut self, url: &str) -> Result<()>;

    /// Saves the résumé into the downloads directory, returning the written path.
    fn save_resume(&mut self, asset: &ResumeAsset) -> Result<PathBuf>;
}

/// Startup capability snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Clipboard can be written
    pub clipboard: bool,
    /// Transition frames can be drawn
    pub transitions: bool,
    /// OS theme preference is readable
    pub os_theme: bool,
}

impl Capabilities {
    /// Probes the platform once.
    #[must_use]
    pub fn detect(platform: &dyn Platform) -> Self {
        let capabilities = Self {
            clipboard: platform.clipboard_available(),
            transitions: platform.supports_transitions(),
            os_theme: platform.os_prefers_dark().is_some(),
        };
        tracing::info!(?capabilities, "Detected platform capabilities");
        capabilities
    }
}

/// Reads the OS color scheme on a background thread.
///
/// `dark_light::detect` may block on the desktop portal, so the UI thread
/// only reads the last value the watcher sent.
pub struct OsThemeWatcher {
    latest: Cell<Option<bool>>,
    receiver: Receiver<Option<bool>>,
}

impl OsThemeWatcher {
    /// Watches the OS dark-mode setting every `interval`.
    #[must_use]
    pub fn spawn(interval: Duration) -> Self {
        Self::spawn_with(interval, detect_os_dark)
    }

    /// Watches an arbitrary detector. The first reading happens before returning.
    pub fn spawn_with(
        interval: Duration,
        detect: impl Fn() -> Option<bool> + Send + 'static,
    ) -> Self {
        let initial = detect();
        let (sender, receiver) = channel();

        std::thread::spawn(move || {
            let mut last = initial;
            loop {
                std::thread::sleep(interval);
                let current = detect();
                if current != last {
                    last = current;
                    // Receiver dropped: the app is gone
                    if sender.send(current).is_err() {
                        break;
                    }
                }
            }
        });

        Self {
            latest: Cell::new(initial),
            receiver,
        }
    }

    /// Most recent reading, without blocking.
    pub fn latest(&self) -> Option<bool> {
        while let Ok(value) = self.receiver.try_recv() {
            self.latest.set(value);
        }
        self.latest.get()
    }
}

fn detect_os_dark() -> Option<bool> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(true),
        Ok(dark_light::Mode::Light) => Some(false),
        Ok(dark_light::Mode::Unspecified) | Err(_) => None,
    }
}

/// Real host integration.
pub struct SystemPlatform {
    clipboard: Option<arboard::Clipboard>,
    os_theme: Option<OsThemeWatcher>,
    download_dir: Option<PathBuf>,
}

impl SystemPlatform {
    /// Creates the platform. `download_dir` overrides the OS downloads folder.
    #[must_use]
    pub const fn new(download_dir: Option<PathBuf>) -> Self {
        Self {
            clipboard: None,
            os_theme: None,
            download_dir,
        }
    }

    /// Opens the system clipboard, keeping it alive for the session.
    ///
    /// On X11 the copied text only survives while the handle is held.
    #[must_use]
    pub fn with_clipboard(mut self) -> Self {
        match arboard::Clipboard::new() {
            Ok(clipboard) => self.clipboard = Some(clipboard),
            Err(e) => tracing::info!("Clipboard unavailable: {e}"),
        }
        self
    }

    /// Starts following the OS color scheme. Without it the OS theme is unknown.
    #[must_use]
    pub fn with_os_theme_watch(mut self, interval: Duration) -> Self {
        self.os_theme = Some(OsThemeWatcher::spawn(interval));
        self
    }

    fn downloads(&self) -> Result<PathBuf> {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .context("No downloads directory available")
    }
}

impl Platform for SystemPlatform {
    fn clipboard_available(&self) -> bool {
        self.clipboard.is_some()
    }

    fn supports_transitions(&self) -> bool {
        transitions_from_term(std::env::var("TERM").ok().as_deref())
    }

    fn os_prefers_dark(&self) -> Option<bool> {
        self.os_theme.as_ref().and_then(OsThemeWatcher::latest)
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        reduced_motion_from_env(|key| std::env::var(key).ok())
    }

    fn copy_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self
            .clipboard
            .as_mut()
            .context("Clipboard is not available")?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to copy to clipboard")
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        validate_url(url)?;

        let mut child = opener_command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context(format!("Failed to open {url}"))?;

        // Reap the opener without blocking the UI
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        tracing::info!("Opened {url}");
        Ok(())
    }

    fn save_resume(&mut self, asset: &ResumeAsset) -> Result<PathBuf> {
        let dir = self.downloads()?;
        fs::create_dir_all(&dir)
            .context(format!("Failed to create directory: {}", dir.display()))?;

        let dest = unique_destination(&dir, &asset.file_name());
        match asset {
            ResumeAsset::File(source) => {
                fs::copy(source, &dest).context(format!(
                    "Failed to copy {} to {}",
                    source.display(),
                    dest.display()
                ))?;
            }
            ResumeAsset::Generated { contents, .. } => {
                fs::write(&dest, contents)
                    .context(format!("Failed to write {}", dest.display()))?;
            }
        }

        tracing::info!("Saved résumé to {}", dest.display());
        Ok(dest)
    }
}

/// Rejects anything that is not a web or mail link.
pub fn validate_url(url: &str) -> Result<()> {
    let lower = url.to_ascii_lowercase();
    if ALLOWED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        Ok(())
    } else {
        anyhow::bail!("Refusing to open '{url}': only http, https and mailto links are allowed")
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

// `cmd /C start` would re-parse `&` and `^` inside the URL
#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("rundll32");
    cmd.args(["url.dll,FileProtocolHandler", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Transition frames need a terminal that can redraw in place.
#[must_use]
pub fn transitions_from_term(term: Option<&str>) -> bool {
    term.map_or(true, |term| term != "dumb")
}

/// Reads the reduced-motion request from environment variables.
///
/// A set variable means "reduce" unless its value is `0`, `false`, `no` or `off`.
pub fn reduced_motion_from_env(get: impl Fn(&str) -> Option<String>) -> Option<bool> {
    let mut answer = None;
    for key in MOTION_ENV_VARS {
        if let Some(value) = get(key) {
            let value = value.trim().to_ascii_lowercase();
            let reduce = !matches!(value.as_str(), "0" | "false" | "no" | "off");
            if reduce {
                return Some(true);
            }
            answer = Some(false);
        }
    }
    answer
}

/// `resume.pdf`, then `resume (1).pdf`, `resume (2).pdf`, ...
fn unique_destination(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map_or_else(|| file_name.to_string(), |s| s.to_string_lossy().into_owned());
    let extension = path.extension().map(|e| e.to_string_lossy().into_owned());

    (1..)
        .map(|n| match &extension {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsStr;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reduced_motion_env() {
        assert_eq!(reduced_motion_from_env(env(&[])), None);
        assert_eq!(reduced_motion_from_env(env(&[("REDUCE_MOTION", "1")])), Some(true));
        assert_eq!(reduced_motion_from_env(env(&[("NO_MOTION", "")])), Some(true));
        assert_eq!(reduced_motion_from_env(env(&[("REDUCE_MOTION", "false")])), Some(false));
        assert_eq!(
            reduced_motion_from_env(env(&[("REDUCE_MOTION", "0"), ("NO_MOTION", "yes")])),
            Some(true)
        );
    }

    #[test]
    fn test_transitions_need_capable_terminal() {
        assert!(transitions_from_term(Some("xterm-256color")));
        assert!(transitions_from_term(None));
        assert!(!transitions_from_term(Some("dumb")));
    }

    #[test]
    fn test_url_schemes() {
        assert!(validate_url("https://github.com/someone").is_ok());
        assert!(validate_url("mailto:hello@example.com").is_ok());
        assert!(validate_url("HTTP://example.com").is_ok());
        assert!(validate_url("file:///etc/passwd").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_save_generated_resume() {
        let temp_dir = TempDir::new().unwrap();
        let mut platform = SystemPlatform::new(Some(temp_dir.path().to_path_buf()));
        let asset = ResumeAsset::Generated {
            file_name: "sam-resume.md".to_string(),
            contents: "# Sam".to_string(),
        };

        let first = platform.save_resume(&asset).unwrap();
        assert_eq!(first, temp_dir.path().join("sam-resume.md"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "# Sam");

        let second = platform.save_resume(&asset).unwrap();
        assert_eq!(second, temp_dir.path().join("sam-resume (1).md"));
    }

    #[test]
    fn test_save_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut platform = SystemPlatform::new(Some(temp_dir.path().join("out")));
        let asset = ResumeAsset::File(temp_dir.path().join("missing.pdf"));
        assert!(platform.save_resume(&asset).is_err());
    }

    #[test]
    fn test_opener_passes_url_as_one_argument() {
        let url = "https://example.com/search?q=a&b=c^d";
        let cmd = opener_command(url);
        let program = cmd.get_program().to_string_lossy().into_owned();
        assert!(!["cmd", "sh", "bash"].contains(&program.as_str()));
        assert_eq!(cmd.get_args().last(), Some(OsStr::new(url)));
    }

    #[test]
    fn test_os_theme_watcher_reports_changes() {
        let dark = Arc::new(AtomicBool::new(false));
        let reading = Arc::clone(&dark);
        let watcher = OsThemeWatcher::spawn_with(Duration::from_millis(5), move || {
            Some(reading.load(Ordering::SeqCst))
        });
        assert_eq!(watcher.latest(), Some(false));

        dark.store(true, Ordering::SeqCst);
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while watcher.latest() != Some(true) && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(watcher.latest(), Some(true));
    }

    #[test]
    fn test_unwatched_os_theme_is_unknown() {
        assert_eq!(SystemPlatform::new(None).os_prefers_dark(), None);
    }

    #[test]
    fn test_copy_without_clipboard_fails() {
        let mut platform = SystemPlatform::new(None);
        assert!(!platform.clipboard_available());
        assert!(platform.copy_text("hello").is_err());
    }
}
