//! Key-value storage scopes.
//!
//! Two scopes back the console's client-side state:
//! - persistent: a JSON object under `${AJFSES_HOME}/storage.json`
//! - session: the shell session's environment (`AJFSES_<KEY>`), read-only
//!
//! `MemoryStorage` stands in for either scope in tests.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read access to a storage scope.
pub trait Storage {
    /// Human-readable scope name for logs.
    fn scope(&self) -> &'static str;

    /// Returns the stored value for `key`, if any.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;
}

/// Write access to a storage scope.
pub trait StorageMut: Storage {
    /// Stores `value` under `key`.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory scope.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn scope(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

impl StorageMut for MemoryStorage {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Persistent scope stored as a flat JSON object.
///
/// The file is re-read on every access so separate processes observe each
/// other's writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the default persistent scope under the ajfses home.
    pub fn open_default() -> Self {
        Self::new(crate::config::paths::storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage from {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse storage at {}", self.path.display()))
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(values).context("Failed to serialize storage")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write storage to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn scope(&self) -> &'static str {
        "persistent"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }
}

impl StorageMut for FileStorage {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// Session scope backed by environment variables.
#[derive(Debug, Clone)]
pub struct EnvStorage {
    prefix: String,
}

impl Default for EnvStorage {
    fn default() -> Self {
        Self::new("AJFSES_")
    }
}

impl EnvStorage {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Maps a storage key to its environment variable name.
    ///
    /// `auth_token` becomes `AJFSES_AUTH_TOKEN`, `lastLogo` becomes `AJFSES_LASTLOGO`.
    pub fn env_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_ascii_uppercase())
    }
}

impl Storage for EnvStorage {
    fn scope(&self) -> &'static str {
        "session"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(std::env::var(self.env_key(key)).ok())
    }
}

/// The two scopes a console process reads, in lookup priority order.
#[derive(Debug, Clone)]
pub struct Scopes {
    pub persistent: FileStorage,
    pub session: EnvStorage,
}

impl Scopes {
    pub fn new(persistent: FileStorage, session: EnvStorage) -> Self {
        Self {
            persistent,
            session,
        }
    }

    /// Persistent file under the ajfses home plus the `AJFSES_` environment.
    pub fn open_default() -> Self {
        Self::new(FileStorage::open_default(), EnvStorage::default())
    }

    /// Persistent first, session second.
    pub fn lookup_order(&self) -> [&dyn Storage; 2] {
        [&self.persistent, &self.session]
    }
}
