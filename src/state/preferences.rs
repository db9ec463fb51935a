//! Key-value preference storage.
//!
//! Holds the one persisted choice the UI makes on the user's behalf (the
//! theme). The file store keeps a flat TOML table next to `config.toml`.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{write_atomic, Config};

/// A persistent string-to-string store.
pub trait PreferenceStore {
    /// Reads a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value; the write is durable when this returns `Ok`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preference store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .context(format!("Failed to read preferences: {}", path.display()))?;
            toml::from_str(&content)
                .context(format!("Failed to parse preferences: {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Opens the store in the platform config directory.
    pub fn open_default() -> Result<Self> {
        Self::open(Config::preferences_file_path()?)
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let content = toml::to_string(&self.values).context("Failed to serialize preferences")?;
        write_atomic(&self.path, &content)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(err) = self.persist() {
            // Keep memory and disk in agreement
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

/// In-memory store, used when no config directory is available and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryPreferenceStore {
    /// Creates an empty writable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values,
            read_only: false,
        }
    }

    /// Creates a store whose writes always fail.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            values: BTreeMap::new(),
            read_only: true,
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            anyhow::bail!("Preference store is read-only");
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
