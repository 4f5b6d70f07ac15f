//! Places checked-out content at its final, revision-disambiguated destination.
//!
//! The destination is always replaced wholesale: anything already there is
//! deleted before the copy (last write wins, no merge). Whole-repository
//! copies skip the `.git` metadata directory at the top level only.

mod copy;
mod naming;

pub use copy::{copy_tree, count_tree, remove_existing};
pub use naming::{destination_name, revision_suffix};

use crate::cancellation::CancellationToken;
use crate::constants::GIT_METADATA_DIR;
use crate::core_types::{RepoReference, TreeCounts};
use crate::errors::{placement_error, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the content ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub destination: PathBuf,
    pub counts: TreeCounts,
}

/// Copies the requested content out of `clone_dir` into `output_dir`.
///
/// For a folder the destination is a copy of that folder. For a single file
/// (a `blob` URL) the destination is a directory containing that file. For the
/// whole repository every top-level entry except `.git` is copied.
///
/// # Errors
/// `Error::PathNotFound` if the requested path is absent from the checkout,
/// `Error::PlacementFailed` on any delete/copy failure, and
/// `Error::Interrupted` if the token is cancelled mid-copy.
///
/// # Examples
/// ```
/// use ghfd::core_types::RepoReference;
/// use ghfd::placement::place;
/// use ghfd::CancellationToken;
/// use std::fs;
///
/// let clone = tempfile::tempdir().unwrap();
/// fs::create_dir_all(clone.path().join("src")).unwrap();
/// fs::write(clone.path().join("src/lib.rs"), "pub fn x() {}").unwrap();
/// let out = tempfile::tempdir().unwrap();
///
/// let reference = RepoReference::new("o", "r", "develop", "src");
/// let placement = place(clone.path(), &reference, out.path(), &CancellationToken::new()).unwrap();
///
/// assert_eq!(placement.destination, out.path().join("src_develop"));
/// assert_eq!(placement.counts.files, 1);
/// ```
pub fn place(
    clone_dir: &Path,
    reference: &RepoReference,
    output_dir: &Path,
    token: &CancellationToken,
) -> Result<Placement> {
    let destination = output_dir.join(destination_name(reference));

    if reference.is_whole_repository() {
        log::info!(
            "Copying '{}' (excluding {}) to '{}'",
            clone_dir.display(),
            GIT_METADATA_DIR,
            destination.display()
        );
        remove_existing(&destination)?;
        copy_repository(clone_dir, &destination, token)?;
    } else {
        let not_found = || Error::PathNotFound {
            path: reference.path.clone(),
            revision: reference.revision.clone(),
            kind: reference.revision_kind,
        };
        // The clone's metadata directory is not part of the checked-out tree.
        if names_git_metadata(&reference.path) {
            return Err(not_found());
        }
        let source = clone_dir.join(&reference.path);
        let source_meta = fs::symlink_metadata(&source).map_err(|_| not_found())?;

        log::info!("Copying '{}' to '{}'", source.display(), destination.display());
        remove_existing(&destination)?;
        if source_meta.is_dir() {
            copy_tree(&source, &destination, token)?;
        } else {
            let file_name = source.file_name().map(PathBuf::from).unwrap_or_default();
            fs::create_dir_all(&destination).map_err(|e| placement_error(e, &destination))?;
            copy_tree(&source, &destination.join(file_name), token)?;
        }
    }

    let counts = count_tree(&destination)?;
    log::info!(
        "Placed {} files and {} directories at '{}'",
        counts.files,
        counts.directories,
        destination.display()
    );
    Ok(Placement {
        destination,
        counts,
    })
}

fn names_git_metadata(path: &str) -> bool {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .is_some_and(|first| first == GIT_METADATA_DIR)
}

fn copy_repository(clone_dir: &Path, destination: &Path, token: &CancellationToken) -> Result<()> {
    fs::create_dir_all(destination).map_err(|e| placement_error(e, destination))?;
    let entries = fs::read_dir(clone_dir).map_err(|e| placement_error(e, clone_dir))?;
    for entry in entries {
        let entry = entry.map_err(|e| placement_error(e, clone_dir))?;
        let name = entry.file_name();
        if name == GIT_METADATA_DIR {
            continue;
        }
        copy_tree(&entry.path(), &destination.join(&name), token)?;
    }
    Ok(())
}
