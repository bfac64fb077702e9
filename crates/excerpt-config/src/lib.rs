//! # excerpt-config
//!
//! Layered configuration loading for excerpt using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EXCERPT_*` prefix, `__` as separator)
//! 2. Project-level `.excerpt/config.toml`
//! 3. User-level `~/.config/excerpt/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `EXCERPT_SOURCES__LANGUAGE` -> `sources.language` and
//! `EXCERPT_SOURCES__ROOTS='["src", "docs"]'` -> `sources.roots`.
//!
//! ```no_run
//! use excerpt_config::ExcerptConfig;
//!
//! let config = ExcerptConfig::load().expect("config");
//! if config.sources.is_configured() {
//!     println!("searching {} roots", config.sources.roots.len());
//! }
//! ```

mod error;
mod sources;

pub use error::ConfigError;
pub use sources::SourcesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExcerptConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl ExcerptConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` when a layer cannot be read or does not
    /// fit the configuration shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the provider chain. Public so tests and the CLI can layer
    /// further providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = Self::local_config_path();
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("EXCERPT_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("excerpt").join("config.toml"))
    }

    /// Path to the project config file, relative to the working directory.
    #[must_use]
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".excerpt").join("config.toml")
    }
}
