//! Defines application-specific error types.
//!
//! Every failure is terminal for a run. The variants follow the stages of the
//! pipeline so the caller can tell what failed and show the underlying
//! diagnostic output.

use crate::core_types::RevisionKind;
use std::fmt;
use thiserror::Error;

/// The version-control stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    Clone,
    Unshallow,
    SparseConfig,
    Checkout,
}

impl fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckoutStage::Clone => "clone",
            CheckoutStage::Unshallow => "unshallow",
            CheckoutStage::SparseConfig => "sparse-config",
            CheckoutStage::Checkout => "checkout",
        };
        f.write_str(name)
    }
}

/// Application-specific errors used throughout `ghfd`.
#[derive(Error, Debug)]
pub enum Error {
    /// The input URL is malformed or does not name at least an owner and a repository.
    #[error("Invalid GitHub URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The git executable could not be run.
    #[error("Git is not installed or not available in PATH ('{program}': {reason}). Please install Git: https://git-scm.com/downloads")]
    PreconditionMissing { program: String, reason: String },

    /// A git command exited unsuccessfully.
    #[error("Git {stage} failed: {cause}")]
    CheckoutFailed { stage: CheckoutStage, cause: String },

    /// The requested folder is absent from the checked-out tree.
    #[error("Folder '{path}' not found in {kind} '{revision}'")]
    PathNotFound {
        path: String,
        revision: String,
        kind: RevisionKind,
    },

    /// Copying to, or clearing, the destination failed.
    #[error("Failed to place files at '{path}': {source}")]
    PlacementFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error occurring while preparing local directories (workspace, output root).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration that is not a URL problem.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Download interrupted by user")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::PlacementFailed` with path context.
pub fn placement_error<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::PlacementFailed {
        path: path.as_ref().display().to_string(),
        source,
    }
}
