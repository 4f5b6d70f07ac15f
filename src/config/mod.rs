//! Defines the `Config` struct used for a download run.
//!
//! This module consolidates the settings parsed and validated from the CLI
//! (or set programmatically through [`ConfigBuilder`]) into one immutable,
//! type-safe value.

use crate::core_types::RepoReference;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod path_resolve;
mod validation;

/// Represents the validated configuration for a single download.
#[derive(Debug, Clone)]
pub struct Config {
    /// The original input URL, as given.
    pub url: String,
    /// The parsed reference (owner, repository, revision, path).
    pub reference: RepoReference,
    /// Directory under which the destination is created. Not yet created or canonicalized.
    pub output_dir: PathBuf,
    /// The git executable to run.
    pub git_program: PathBuf,
    /// Parent directory for the scratch workspace. `None` means the system temp dir.
    pub workspace_dir: Option<PathBuf>,
    /// Base for clone URLs, normally `https://github.com`.
    pub remote_base: String,
    /// Whether a progress spinner may be shown.
    pub show_progress: bool,
}

impl Config {
    /// The URL passed to `git clone`.
    pub fn clone_url(&self) -> String {
        self.reference.clone_url(&self.remote_base)
    }
}
