// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub locations: LocationOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            store: StoreOptions::default(),
            locations: LocationOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults, then any `LABOUR_FINDER_*` environment overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        let nonblank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = nonblank(ENV_STORE_DIR) {
            opts.set_store_dir(dir);
        }
        if let Some(url) = nonblank(ENV_DATA_URL) {
            opts.locations.url = url;
        }
        if let Some(file) = nonblank(ENV_LOCATIONS) {
            opts.locations.local_file = Some(PathBuf::from(file));
        }
        opts
    }

    /// Move the store directory; the locations cache follows it.
    pub fn set_store_dir(&mut self, dir: impl Into<PathBuf>) {
        self.store.dir = dir.into();
        self.locations.cache = self.store.dir.join(LOCATIONS_CACHE_FILE);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub dir: PathBuf,
    pub file: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            file: s!(STORE_FILE),
        }
    }
}

impl StoreOptions {
    /// The single "storage key" holding the provider collection.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationOptions {
    pub url: String,
    pub cache: PathBuf,
    /// Read the dataset from this file instead of the network.
    pub local_file: Option<PathBuf>,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            url: s!(DATA_URL),
            cache: Path::new(STORE_DIR).join(LOCATIONS_CACHE_FILE),
            local_file: None,
        }
    }
}
