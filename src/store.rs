// src/store.rs
//
// Persistence of the provider collection: one JSON array under one key.
//
// Read policy: a missing, empty, corrupt or otherwise unparseable blob reads
// as an empty collection. That is deliberate and never reported to callers;
// it matches how the directory has always behaved. A later append then
// replaces the unreadable blob with a fresh one-element collection.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::config::options::StoreOptions;
use crate::provider::Provider;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode providers: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write provider store {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Owner of the provider collection. All writes go through `append`.
pub trait ProviderStore {
    /// Whole collection, insertion order. Never fails.
    fn read_all(&self) -> Vec<Provider>;

    /// Add one provider at the end and persist the whole collection.
    fn append(&mut self, provider: Provider) -> Result<(), StoreError>;
}

/// Parse-or-empty. Shared by every backend so they degrade identically.
pub fn decode(blob: Option<&str>) -> Vec<Provider> {
    let Some(text) = blob else { return Vec::new() };
    if text.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Provider>>(text) {
        Ok(list) => list,
        Err(e) => {
            logd!("Store: unreadable blob treated as empty ({e})");
            Vec::new()
        }
    }
}

pub fn encode(providers: &[Provider]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(providers)?)
}

/* ---------------- File backend ---------------- */

/// One JSON file on disk; the file path is the storage key.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_options(opts: &StoreOptions) -> Self {
        Self::new(opts.path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write to a sibling temp file, then rename over the target.
    fn write_blob(&self, blob: &str) -> Result<(), StoreError> {
        let wrap = |source| StoreError::Write { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(wrap)?;
            }
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, blob).map_err(wrap)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            wrap(e)
        })
    }
}

impl ProviderStore for JsonFileStore {
    fn read_all(&self) -> Vec<Provider> {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode(Some(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                logd!("Store: cannot read {} ({e}), treating as empty", self.path.display());
                Vec::new()
            }
        }
    }

    fn append(&mut self, provider: Provider) -> Result<(), StoreError> {
        let mut list = self.read_all();
        list.push(provider);
        let blob = encode(&list)?;
        self.write_blob(&blob)?;
        logf!("Store: appended provider #{} → {}", list.len(), self.path.display());
        Ok(())
    }
}

/* ---------------- In-memory backend ---------------- */

/// Holds the raw blob exactly as the file backend would see it, so the
/// parse-or-empty policy is exercised without touching disk.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with an arbitrary (possibly invalid) blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: Some(blob.into()) }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl ProviderStore for MemoryStore {
    fn read_all(&self) -> Vec<Provider> {
        decode(self.blob.as_deref())
    }

    fn append(&mut self, provider: Provider) -> Result<(), StoreError> {
        let mut list = self.read_all();
        list.push(provider);
        self.blob = Some(encode(&list)?);
        Ok(())
    }
}
