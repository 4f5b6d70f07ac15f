// src/git/checkout.rs
//! Materializes exactly one path of a repository at one revision.
//!
//! The sequence is linear: clone (tree-less, no checkout), then for commits a
//! probe for the commit object and, only when it is missing, a history
//! extension, then sparse-checkout configuration local to the clone, then the
//! checkout itself. Branches and tags are cloned shallow and by name; commits
//! are cloned without a depth limit because they may sit outside any ref's
//! recent history.

use super::ops::{GitOutput, GitRunner};
use crate::cancellation::CancellationToken;
use crate::constants::{COMMIT_SUFFIX_LEN, GIT_METADATA_DIR};
use crate::core_types::{RepoReference, RevisionKind};
use crate::errors::{CheckoutStage, Error, Result};
use crate::progress::ProgressReporter;
use crate::workspace::Workspace;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the initial clone of `clone_url` into `dest` (relative to the workspace).
///
/// # Examples
/// ```
/// use ghfd::core_types::RepoReference;
/// use ghfd::git::clone_args;
///
/// let tag = RepoReference::new("user", "repo", "v1.2.0", "docs");
/// assert_eq!(
///     clone_args(&tag, "https://github.com/user/repo.git", "repo"),
///     ["clone", "--no-checkout", "--filter=blob:none", "--depth", "1", "--branch", "v1.2.0",
///      "https://github.com/user/repo.git", "repo"]
/// );
/// ```
pub fn clone_args<'a>(
    reference: &'a RepoReference,
    clone_url: &'a str,
    dest: &'a str,
) -> Vec<&'a str> {
    let mut args = vec!["clone", "--no-checkout", "--filter=blob:none"];
    if reference.revision_kind != RevisionKind::Commit {
        // `--branch` accepts tags as well as branches.
        args.extend(["--depth", "1", "--branch", reference.revision.as_str()]);
    }
    args.extend([clone_url, dest]);
    args
}

/// Contents of the sparse-checkout pattern file for `path`.
///
/// A non-empty path selects the path itself and everything beneath it; an
/// empty path selects the whole repository.
///
/// # Examples
/// ```
/// use ghfd::git::sparse_patterns;
///
/// assert_eq!(sparse_patterns("src/app"), "src/app\nsrc/app/**\n");
/// assert_eq!(sparse_patterns(""), "*\n");
/// ```
pub fn sparse_patterns(path: &str) -> String {
    if path.is_empty() {
        "*\n".to_string()
    } else {
        format!("{0}\n{0}/**\n", path)
    }
}

/// Sequences the git commands for one checkout.
pub struct CheckoutOrchestrator<'a, G: GitRunner + ?Sized> {
    git: &'a G,
    token: &'a CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
}

impl<'a, G: GitRunner + ?Sized> CheckoutOrchestrator<'a, G> {
    pub fn new(git: &'a G, token: &'a CancellationToken) -> Self {
        Self {
            git,
            token,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: Option<Arc<dyn ProgressReporter>>) -> Self {
        self.progress = progress;
        self
    }

    /// Clones `clone_url` into `workspace` and checks out `reference`.
    ///
    /// Returns the clone directory, positioned at the requested revision with
    /// only the requested path materialized.
    ///
    /// # Errors
    /// `Error::CheckoutFailed` tagged with the failing stage, or
    /// `Error::Interrupted` if the token is cancelled.
    pub fn checkout(
        &self,
        reference: &RepoReference,
        clone_url: &str,
        workspace: &Workspace,
    ) -> Result<PathBuf> {
        let span = tracing::info_span!(
            "checkout",
            owner = %reference.owner,
            repo = %reference.repo,
            revision = %reference.revision
        );
        let _enter = span.enter();

        let clone_dir = workspace.clone_dir(&reference.repo);

        self.report(format!("Cloning {}/{}...", reference.owner, reference.repo));
        info!("Cloning repository (without checkout) from '{}'", clone_url);
        self.run_stage(
            CheckoutStage::Clone,
            &clone_args(reference, clone_url, &reference.repo),
            workspace.path(),
        )?;
        info!("Repository cloned");

        if reference.revision_kind == RevisionKind::Commit {
            self.ensure_commit(&clone_dir, &reference.revision)?;
        }

        self.report("Configuring sparse-checkout...".to_string());
        self.configure_sparse(&clone_dir, &reference.path)?;

        self.report(format!(
            "Checking out {} '{}'...",
            reference.revision_kind, reference.revision
        ));
        self.run_stage(
            CheckoutStage::Checkout,
            &["checkout", reference.revision.as_str()],
            &clone_dir,
        )?;
        info!("Checked out {} '{}'", reference.revision_kind, reference.revision);

        Ok(clone_dir)
    }

    /// Makes sure the commit object exists, extending history if it does not.
    fn ensure_commit(&self, clone_dir: &Path, commit: &str) -> Result<()> {
        let short = &commit[..COMMIT_SUFFIX_LEN.min(commit.len())];
        self.report(format!("Fetching commit {}...", short));
        self.token.check()?;

        let present = match self.git.run(&["cat-file", "-e", commit], Some(clone_dir)) {
            Ok(output) => output.success,
            Err(e) => {
                debug!("Could not probe for commit {}: {}", short, e);
                false
            }
        };
        self.token.check()?;

        if present {
            info!("Commit {} found in repository", short);
            return Ok(());
        }

        warn!("Commit {} not in fetched history, fetching more...", short);
        self.run_stage(CheckoutStage::Unshallow, &["fetch", "--unshallow"], clone_dir)?;
        info!("Full history fetched");
        Ok(())
    }

    /// Enables sparse checkout for this clone only and writes the pattern file.
    fn configure_sparse(&self, clone_dir: &Path, path: &str) -> Result<()> {
        self.run_stage(
            CheckoutStage::SparseConfig,
            &["config", "--local", "core.sparseCheckout", "true"],
            clone_dir,
        )?;

        let sparse_file = clone_dir
            .join(GIT_METADATA_DIR)
            .join("info")
            .join("sparse-checkout");
        write_sparse_file(&sparse_file, &sparse_patterns(path)).map_err(|e| {
            Error::CheckoutFailed {
                stage: CheckoutStage::SparseConfig,
                cause: format!("{}: {}", sparse_file.display(), e),
            }
        })?;

        if path.is_empty() {
            info!("Sparse-checkout configured for the entire repository");
        } else {
            info!("Sparse-checkout configured for folder '{}'", path);
        }
        Ok(())
    }

    /// Runs one git command that must succeed.
    fn run_stage(&self, stage: CheckoutStage, args: &[&str], cwd: &Path) -> Result<GitOutput> {
        self.token.check()?;
        let output = self
            .git
            .run(args, Some(cwd))
            .map_err(|e| Error::CheckoutFailed {
                stage,
                cause: e.to_string(),
            })?;
        // Ctrl+C also kills the git child; report that as an interruption, not a failure.
        self.token.check()?;

        if !output.success {
            debug!("Command failed: git {}", args.join(" "));
            return Err(Error::CheckoutFailed {
                stage,
                cause: output.diagnostic(),
            });
        }
        Ok(output)
    }

    fn report(&self, message: String) {
        if let Some(p) = &self.progress {
            p.set_message(message);
        }
    }
}

fn write_sparse_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
