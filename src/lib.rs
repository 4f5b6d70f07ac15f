//! `ghfd` is a library and command-line tool for downloading a single folder
//! (or an entire repository) from GitHub at a specific branch, tag, or commit,
//! without transferring the full history or unrelated files.
//!
//! It takes the ordinary web URL of a folder, as copied from a browser, and
//! runs a minimal sequence of git commands in a throwaway workspace:
//! 1.  **Parse**: Turn the URL into a [`RepoReference`](core_types::RepoReference)
//!     (owner, repository, revision, revision kind, path).
//! 2.  **Checkout**: Tree-less clone, optional history extension for commits,
//!     sparse-checkout scoped to the clone, checkout of the revision.
//! 3.  **Place**: Copy the folder to a revision-disambiguated destination,
//!     replacing any previous download at the same path.
//!
//! The scratch workspace is removed on every exit path.
//!
//! # Example: Library Usage
//!
//! ```no_run
//! use ghfd::{run, CancellationToken, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .url("https://github.com/user/repo/tree/v1.2.0/docs")
//!     .output_dir("/tmp/downloads")
//!     .build()
//!     .unwrap();
//!
//! let token = CancellationToken::new();
//! let download = run(&config, &token, None).unwrap();
//!
//! // "/tmp/downloads/docs_v1.2.0"
//! println!("{}", download.destination.display());
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod git;
pub mod output;
pub mod placement;
pub mod progress;
pub mod signal;
pub mod workspace;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::{Download, RepoReference, RevisionKind, TreeCounts};
pub use errors::{Error, Result};

use crate::errors::io_error_with_path;
use crate::git::{CheckoutOrchestrator, GitRunner, SystemGit};
use crate::placement::Placement;
use crate::progress::ProgressReporter;
use crate::workspace::Workspace;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Executes a download with the git executable named in the `Config`.
///
/// This is the primary entry point and mirrors the command-line execution.
///
/// # Errors
/// See [`download`].
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<Download> {
    let git = SystemGit::new(&config.git_program);
    download(config, &git, token, progress)
}

/// Executes a download using the given [`GitRunner`].
///
/// Checks that git can run, creates the output root, checks out the requested
/// path in a fresh scratch workspace, places it, and removes the workspace.
///
/// # Errors
/// - `Error::PreconditionMissing` if git cannot run (before any workspace exists).
/// - `Error::Io` if the output root or workspace cannot be created.
/// - `Error::CheckoutFailed`, `Error::PathNotFound`, `Error::PlacementFailed`
///   from the checkout and placement stages.
/// - `Error::Interrupted` if `token` is cancelled.
///
/// The progress reporter, if any, is finished either way: with the destination
/// on success, cleared on failure.
pub fn download<G: GitRunner + ?Sized>(
    config: &Config,
    git: &G,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<Download> {
    let result = download_with(config, git, token, progress.clone());
    if let Some(p) = &progress {
        match &result {
            Ok(download) => p.finish_with_message(format!(
                "Downloaded to {}",
                download.destination.display()
            )),
            Err(_) => p.finish(),
        }
    }
    result
}

fn download_with<G: GitRunner + ?Sized>(
    config: &Config,
    git: &G,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<Download> {
    log::info!("Downloading '{}'", config.url);
    let git_version = git::git_version(git)?;
    log::info!("Using Git: {}", git_version);
    token.check()?;

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| io_error_with_path(e, &config.output_dir))?;
    let output_dir = fs::canonicalize(&config.output_dir)
        .map_err(|e| io_error_with_path(e, &config.output_dir))?;
    log::info!("Output directory: {}", output_dir.display());

    let workspace = match &config.workspace_dir {
        Some(dir) => Workspace::create_in(dir)?,
        None => Workspace::create()?,
    };

    let placed = checkout_and_place(config, git, token, progress, &workspace, &output_dir);
    if let Err(e) = workspace.close() {
        log::warn!("Failed to remove scratch workspace: {}", e);
    }
    let placement = placed?;

    Ok(Download {
        reference: config.reference.clone(),
        destination: placement.destination,
        counts: placement.counts,
        git_version,
    })
}

fn checkout_and_place<G: GitRunner + ?Sized>(
    config: &Config,
    git: &G,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
    workspace: &Workspace,
    output_dir: &Path,
) -> Result<Placement> {
    let clone_dir = CheckoutOrchestrator::new(git, token)
        .with_progress(progress.clone())
        .checkout(&config.reference, &config.clone_url(), workspace)?;

    if let Some(p) = &progress {
        p.set_message("Copying to destination...".to_string());
    }
    placement::place(&clone_dir, &config.reference, output_dir, token)
}
