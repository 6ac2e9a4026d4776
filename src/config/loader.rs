// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{LayoutConfig, RawLayoutFile};
use crate::errors::Result;

/// Load a layout config file from a given path and return the raw
/// `RawLayoutFile`.
///
/// This only performs TOML deserialization; it does **not** perform the
/// dimension checks. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawLayoutFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawLayoutFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a layout config file from path and run validation.
///
/// This is the recommended entry point:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that every dimension is finite and positive, and that the
///   canvas is at least one node wide.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LayoutConfig> {
    let raw = load_from_path(&path)?;
    let config = LayoutConfig::try_from(raw)?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Taskdag.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Taskdag.toml")
}
