// src/git/mod.rs
//! Turns a GitHub URL into a sparse checkout of exactly the requested path.
//!
//! This module provides functionality to:
//! - Parse GitHub folder/file URLs into a [`RepoReference`](crate::core_types::RepoReference).
//! - Run git commands through the narrow [`GitRunner`] capability.
//! - Sequence clone, history extension, sparse configuration and checkout.

// Declare the sub-modules.
mod checkout;
#[cfg(test)]
pub(crate) mod fake;
mod ops;
mod url;

// Re-export the public-facing API.
pub use checkout::{clone_args, sparse_patterns, CheckoutOrchestrator};
pub use ops::{GitOutput, GitRunner, SystemGit};
pub use self::url::{is_github_url, parse_github_url};

use crate::errors::{Error, Result};

/// Queries the git version, failing with `Error::PreconditionMissing` when git
/// cannot be run.
///
/// # Examples
/// ```no_run
/// use ghfd::git::{git_version, SystemGit};
///
/// let version = git_version(&SystemGit::default()).unwrap();
/// assert!(version.starts_with("git version"));
/// ```
pub fn git_version<G: GitRunner + ?Sized>(git: &G) -> Result<String> {
    let missing = |reason: String| Error::PreconditionMissing {
        program: git.program_name(),
        reason,
    };
    let output = git
        .run(&["--version"], None)
        .map_err(|e| missing(e.to_string()))?;
    if !output.success {
        return Err(missing(output.diagnostic()));
    }
    Ok(output.stdout.trim().to_string())
}
