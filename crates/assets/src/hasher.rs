//! Content-hash cache busting for built assets.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use exn::ResultExt;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::mode::Mode;
use crate::path::validate as validate_path;

/// Query parameter carrying the content digest.
pub const VERSION_PARAM: &str = "v";

/// Digests of asset contents, keyed by the URL they were requested with.
///
/// Entries are never invalidated: an asset modified after its first lookup
/// keeps its original digest for as long as the cache lives. Construct one
/// per build.
#[derive(Debug, Default)]
pub struct HashCache {
    digests: Mutex<HashMap<String, String>>,
}
impl HashCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<String> {
        self.digests.lock().unwrap_or_else(PoisonError::into_inner).get(url).cloned()
    }

    /// Stores the digest for `url` unless one is already present, returning
    /// whichever digest the cache ends up holding.
    pub fn insert(&self, url: impl Into<String>, digest: impl Into<String>) -> String {
        let mut digests = self.digests.lock().unwrap_or_else(PoisonError::into_inner);
        digests.entry(url.into()).or_insert_with(|| digest.into()).clone()
    }

    pub fn len(&self) -> usize {
        self.digests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Appends a content digest to asset URLs so that browsers and CDNs fetch a
/// fresh copy whenever the asset changes.
///
/// Outside of [`Mode::Production`] the hasher never touches the filesystem
/// and hands URLs back unchanged.
///
/// # Example
///
/// ```no_run
/// use pineapple_assets::{FileHasher, Mode};
/// # use pineapple_assets::error::Result;
///
/// # fn example() -> Result<()> {
/// let hasher = FileHasher::new("dist", Mode::Production);
/// let url = hasher.file_hash("/styles/main.css")?;
/// assert!(url.starts_with("/styles/main.css?v="));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileHasher {
    root: PathBuf,
    mode: Mode,
    cache: HashCache,
}
impl FileHasher {
    /// Creates a hasher for assets built into `root`, with an empty cache.
    pub fn new(root: impl Into<PathBuf>, mode: Mode) -> Self {
        Self::with_cache(root, mode, HashCache::new())
    }

    /// Creates a hasher sharing digests already computed elsewhere in the build.
    pub fn with_cache(root: impl Into<PathBuf>, mode: Mode, cache: HashCache) -> Self {
        Self { root: root.into(), mode, cache }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cache(&self) -> &HashCache {
        &self.cache
    }

    /// Returns `url` with the digest of the asset it points to appended as
    /// `?v=<hex>` (or `&v=<hex>` if `url` already has a query string).
    ///
    /// The asset is read at most once per URL for the lifetime of the hasher.
    ///
    /// # Errors
    ///
    /// Only in production mode:
    /// - [`ErrorKind::InvalidPath`] if the URL escapes the output root.
    /// - [`ErrorKind::MissingAsset`] if the asset cannot be read, or the URL
    ///   has no path at all (`""`, `"/"`, `"?q"`).
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn file_hash(&self, url: &str) -> Result<String> {
        if !self.mode.is_production() {
            return Ok(url.to_string());
        }
        let digest = match self.cache.get(url) {
            Some(digest) => {
                tracing::trace!("digest cache hit");
                digest
            },
            None => {
                let digest = self.digest(url)?;
                tracing::debug!(%digest, "hashed asset");
                self.cache.insert(url, digest)
            },
        };
        Ok(Self::versioned(url, &digest))
    }

    fn digest(&self, url: &str) -> Result<String> {
        let path = self.root.join(validate_path(url)?);
        let contents = fs::read(&path).or_raise(|| ErrorKind::MissingAsset(url.to_string()))?;
        Ok(blake3::hash(&contents).to_hex().to_string())
    }

    fn versioned(url: &str, digest: &str) -> String {
        let (base, fragment) = url.split_at(url.find('#').unwrap_or(url.len()));
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{base}{separator}{VERSION_PARAM}={digest}{fragment}")
    }
}
