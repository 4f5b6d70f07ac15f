// src/config/path_resolve.rs

use crate::constants::DEFAULT_OUTPUT_SUBDIR;
use crate::errors::{Error, Result};
use directories::BaseDirs;
use std::path::PathBuf;

/// The current user's home directory.
fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| Error::Config("Could not determine the home directory".to_string()))
}

/// Expands a leading `~` to the home directory; other paths are returned as-is.
pub(super) fn expand_home(path_str: &str) -> Result<PathBuf> {
    if path_str == "~" {
        return home_dir();
    }
    match path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(path_str)),
    }
}

/// Resolves the output root: the given path with `~` expanded, or `~/Downloads`.
pub(super) fn resolve_output_dir(output: Option<&str>) -> Result<PathBuf> {
    match output {
        Some(path) => expand_home(path),
        None => Ok(home_dir()?.join(DEFAULT_OUTPUT_SUBDIR)),
    }
}
