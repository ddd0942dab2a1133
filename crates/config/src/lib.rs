//! Build configuration for the site filters.
//!
//! Sources are merged in order, later ones overriding earlier ones:
//!
//! 1. built-in defaults (development mode, `dist` output directory),
//! 2. an optional TOML file ([`DEFAULT_CONFIG_FILE`] unless given),
//! 3. `ELEVENTY_ENV`, the mode flag shared with the rest of the site build,
//! 4. `PINEAPPLE_`-prefixed variables (`PINEAPPLE_MODE`, `PINEAPPLE_OUTPUT_DIR`).

pub mod error;

use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pineapple_assets::{FileHasher, Mode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const DEFAULT_CONFIG_FILE: &str = "pineapple.toml";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const ENV_PREFIX: &str = "PINEAPPLE_";
/// Mode variable read by every step of the site build.
pub const MODE_VAR: &str = "ELEVENTY_ENV";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Only production builds cache-bust asset URLs.
    pub mode: Mode,
    /// Directory the site is built into; asset URLs resolve against it.
    pub output_dir: PathBuf,
}
impl Default for Config {
    fn default() -> Self {
        Self { mode: Mode::default(), output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR) }
    }
}
impl Config {
    /// Loads configuration from [`DEFAULT_CONFIG_FILE`] (if present) and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads configuration from the given TOML file (if present) and the environment.
    #[instrument]
    pub fn load_from(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self> {
        let config: Self = Self::figment(path.as_ref()).extract().or_raise(|| ErrorKind::InvalidConfig)?;
        tracing::debug!(mode = %config.mode, output_dir = %config.output_dir.display(), "loaded configuration");
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::raw().only(&[MODE_VAR]).map(|_| "mode".into()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// A fresh [`FileHasher`] (with an empty cache) for this build.
    pub fn file_hasher(&self) -> FileHasher {
        FileHasher::new(&self.output_dir, self.mode)
    }
}
