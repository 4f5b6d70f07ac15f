// src/config/validation.rs

use crate::errors::{Error, Result};
use crate::git::is_github_url;
use std::path::Path;

/// Rejects input that is not a GitHub URL. Runs before any parsing.
pub(super) fn validate_url(url: &str) -> Result<()> {
    if !is_github_url(url) {
        return Err(Error::InvalidUrl {
            url: url.to_string(),
            reason: "Please provide a valid GitHub URL".to_string(),
        });
    }
    Ok(())
}

/// The output root may not exist yet, but if it does it must be a directory.
pub(super) fn validate_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(Error::Config(format!(
            "Output path '{}' exists and is not a directory.",
            output_dir.display()
        )));
    }
    Ok(())
}
