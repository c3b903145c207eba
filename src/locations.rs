// src/locations.rs
//
// Reference catalog of states and their LGAs. Read-only once loaded.

use std::{fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::options::LocationOptions;
use crate::core::net;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("failed to fetch location data from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read location data from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed location data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("location data lists no states")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    pub state: String,
    pub lgas: Vec<String>,
}

/// Ordered states, each with its ordered LGAs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationCatalog {
    entries: Vec<StateEntry>,
}

impl LocationCatalog {
    pub fn new(entries: Vec<StateEntry>) -> Self {
        Self { entries }
    }

    /// Parse the `[{"state": .., "lgas": [..]}, ..]` document.
    pub fn from_json(text: &str) -> Result<Self, LocationError> {
        let entries: Vec<StateEntry> = serde_json::from_str(text)?;
        if entries.is_empty() {
            return Err(LocationError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.state.as_str())
    }

    pub fn lgas(&self, state: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.state == state)
            .map(|e| e.lgas.as_slice())
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.lgas(state).is_some()
    }

    pub fn contains_lga(&self, state: &str, lga: &str) -> bool {
        self.lgas(state).is_some_and(|lgas| lgas.iter().any(|l| l == lga))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the catalog: explicit local file if configured, else the cache if it
/// parses, else a live fetch (which refreshes the cache).
pub fn load(opts: &LocationOptions) -> Result<LocationCatalog, LocationError> {
    if let Some(path) = &opts.local_file {
        let catalog = read_file(path)?;
        logf!("Locations: {} states from {}", catalog.len(), path.display());
        return Ok(catalog);
    }

    if opts.cache.exists() {
        match read_file(&opts.cache) {
            Ok(catalog) => {
                logf!("Locations: {} states from cache {}", catalog.len(), opts.cache.display());
                return Ok(catalog);
            }
            Err(e) => logw!("Locations: cache unusable, refetching ({e})"),
        }
    }

    let catalog = fetch(&opts.url)?;
    logf!("Locations: {} states fetched from {}", catalog.len(), opts.url);

    if let Err(e) = write_cache(&opts.cache, &catalog) {
        logw!("Locations: could not write cache {} ({e})", opts.cache.display());
    }
    Ok(catalog)
}

fn read_file(path: &Path) -> Result<LocationCatalog, LocationError> {
    let text = fs::read_to_string(path).map_err(|source| LocationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    LocationCatalog::from_json(&text)
}

fn fetch(url: &str) -> Result<LocationCatalog, LocationError> {
    let body = net::http_get(url).map_err(|source| LocationError::Fetch {
        url: s!(url),
        source,
    })?;
    LocationCatalog::from_json(&body)
}

fn write_cache(path: &Path, catalog: &LocationCatalog) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = catalog.to_json().map_err(io::Error::other)?;
    fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"state": "Lagos", "lgas": ["Agege", "Ikeja", "Surulere"]},
        {"state": "Oyo", "lgas": ["Ibadan North", "Ogbomosho South"]}
    ]"#;

    #[test]
    fn parses_and_keeps_order() {
        let cat = LocationCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(cat.states().collect::<Vec<_>>(), vec!["Lagos", "Oyo"]);
        assert_eq!(cat.lgas("Lagos").unwrap()[1], "Ikeja");
        assert!(cat.lgas("Kano").is_none());
    }

    #[test]
    fn lga_must_sit_under_its_state() {
        let cat = LocationCatalog::from_json(SAMPLE).unwrap();
        assert!(cat.contains_lga("Lagos", "Ikeja"));
        assert!(!cat.contains_lga("Oyo", "Ikeja"));
        assert!(!cat.contains_lga("lagos", "Ikeja"));
    }

    #[test]
    fn empty_or_wrong_shape_is_an_error() {
        assert!(matches!(LocationCatalog::from_json("[]"), Err(LocationError::Empty)));
        assert!(matches!(
            LocationCatalog::from_json(r#"{"Lagos": ["Ikeja"]}"#),
            Err(LocationError::Parse(_))
        ));
    }
}
