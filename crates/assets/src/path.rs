//! Asset URL to filesystem path resolution.

use std::path::{Component, Path, PathBuf};

use crate::error::{ErrorKind, Result};

/// Strips the query string and fragment from an asset URL.
pub(crate) fn url_path(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or_default()
}

/// Normalizes the path part of an asset URL so it can be joined onto the
/// output root. Leading slashes are dropped, so site-absolute URLs such as
/// `/assets/main.css` resolve under the root too.
///
/// # Returns
/// Returns the normalized path if valid, [`InvalidPath`](crate::error::ErrorKind::InvalidPath)
/// if the URL climbs above the root or contains a NUL byte, or
/// [`MissingAsset`](crate::error::ErrorKind::MissingAsset) if it names no file at all.
pub(crate) fn validate(url: &str) -> Result<PathBuf> {
    let mut components = Vec::new();
    for component in Path::new(url_path(url)).components() {
        match component {
            Component::Normal(s) => {
                if s.as_encoded_bytes().contains(&0) {
                    exn::bail!(ErrorKind::InvalidPath(url.to_string()));
                }
                components.push(s)
            },
            Component::CurDir | Component::RootDir => {},
            Component::Prefix(_) => exn::bail!(ErrorKind::InvalidPath(url.to_string())),
            Component::ParentDir => {
                if components.pop().is_none() {
                    exn::bail!(ErrorKind::InvalidPath(url.to_string()));
                }
            },
        }
    }
    match components.is_empty() {
        true => exn::bail!(ErrorKind::MissingAsset(url.to_string())),
        false => Ok(components.into_iter().collect()),
    }
}
