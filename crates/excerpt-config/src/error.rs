//! Errors raised while loading or checking excerpt settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `EXCERPT_*` variable could not be read or does not fit
    /// the settings shape.
    #[error("Failed to load excerpt configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error(
        "No source roots configured: set sources.roots in .excerpt/config.toml, \
         set EXCERPT_SOURCES__ROOTS or pass --root"
    )]
    NoSourceRoots,

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}
