//! Cached, updatable, by-name-searchable entity lists.
//!
//! One generic component instantiated twice: once for colorscheme entries
//! and once for templates. The two instances differ only in their remote
//! index format (see [`RegistryEntry::parse_index`]) and cache locations.
use anyhow::{Context as _, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::RegistryError;
use crate::fetch::Fetch;
use crate::fsutil;

/// An entry held in a registry cache.
pub trait RegistryEntry: DeserializeOwned + Serialize + Sized {
    /// Unique entry name used for exact-match lookup.
    fn name(&self) -> &str;

    /// Parse the remote index document into entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    fn parse_index(text: &str) -> Result<Vec<Self>>;
}

/// A named entity list backed by a local cache file.
#[derive(Debug)]
pub struct Registry<E> {
    entries: Vec<E>,
}

impl<E: RegistryEntry> Registry<E> {
    /// Read entries from the local cache file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CacheMissing`] if the cache has never been
    /// written, or a parse error if it is corrupt.
    pub fn load(cache_file: &Path) -> Result<Self> {
        if !cache_file.exists() {
            return Err(RegistryError::CacheMissing(cache_file.to_path_buf()).into());
        }
        let text = std::fs::read_to_string(cache_file)
            .with_context(|| format!("reading registry cache {}", cache_file.display()))?;
        let entries: Vec<E> = serde_json::from_str(&text)
            .with_context(|| format!("parsing registry cache {}", cache_file.display()))?;
        Ok(Self { entries })
    }

    /// Fetch the remote index and overwrite the cache file.
    ///
    /// The index is parsed in full before anything is written, and the cache
    /// is replaced in a single rename, so a failed update never leaves a
    /// partially written list behind.
    ///
    /// # Errors
    ///
    /// Returns an error on fetch failure, a malformed index, or cache I/O
    /// failure.
    pub fn update(cache_file: &Path, index_url: &str, fetch: &dyn Fetch) -> Result<()> {
        let text = fetch
            .get_text(index_url)
            .with_context(|| format!("updating registry from {index_url}"))?;
        let entries = E::parse_index(&text)?;
        let json = serde_json::to_string_pretty(&entries).context("serializing registry cache")?;
        fsutil::ensure_parent_dir(cache_file)?;
        fsutil::write_atomic(cache_file, &json)
            .with_context(|| format!("writing registry cache {}", cache_file.display()))
    }

    /// Look up an entry by exact, case-sensitive name match.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no entry has that name.
    pub fn find(&self, name: &str) -> Result<&E, RegistryError> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// All loaded entries.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }
}
