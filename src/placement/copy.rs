// src/placement/copy.rs
//! Filesystem helpers: replace, recursive copy with metadata, counting.

use crate::cancellation::CancellationToken;
use crate::core_types::TreeCounts;
use crate::errors::{placement_error, Result};
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Deletes whatever is at `path` (directory tree, file, or symlink). A missing path is fine.
pub fn remove_existing(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(placement_error(e, path)),
    };
    log::info!("Removing existing destination: {}", path.display());
    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| placement_error(e, path))
}

/// Recursively copies `src` (file, directory or symlink) to `dst`.
///
/// Symlinks are recreated, never followed. Timestamps and permissions are
/// carried over where the filesystem supports it. Directories are finalized
/// after their contents so read-only directories still receive their files.
pub fn copy_tree(src: &Path, dst: &Path, token: &CancellationToken) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(false).contents_first(true) {
        token.check()?;
        let entry = entry.map_err(|e| placement_error(e.into(), src))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| placement_error(io::Error::new(io::ErrorKind::Other, e), entry.path()))?;
        let target = if relative.as_os_str().is_empty() {
            dst.to_path_buf()
        } else {
            dst.join(relative)
        };

        copy_entry(entry.path(), &target, entry.file_type())
            .map_err(|e| placement_error(e, &target))?;
    }
    Ok(())
}

fn copy_entry(src: &Path, target: &Path, file_type: fs::FileType) -> io::Result<()> {
    if file_type.is_dir() {
        fs::create_dir_all(target)?;
        let metadata = fs::metadata(src)?;
        set_times(&metadata, target)?;
        return fs::set_permissions(target, metadata.permissions());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    if file_type.is_symlink() {
        return copy_symlink(src, target);
    }

    // fs::copy carries permission bits over.
    fs::copy(src, target)?;
    set_times(&fs::metadata(src)?, target)
}

fn set_times(metadata: &fs::Metadata, target: &Path) -> io::Result<()> {
    filetime::set_file_times(
        target,
        FileTime::from_last_access_time(metadata),
        FileTime::from_last_modification_time(metadata),
    )
}

#[cfg(unix)]
fn copy_symlink(src: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(src)?, target)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, _target: &Path) -> io::Result<()> {
    log::warn!(
        "Skipping symlink '{}': symlinks are only recreated on Unix",
        src.display()
    );
    Ok(())
}

/// Counts files and directories beneath `root` (excluding `root` itself).
pub fn count_tree(root: &Path) -> Result<TreeCounts> {
    let mut counts = TreeCounts::default();
    for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| placement_error(e.into(), root))?;
        if entry.file_type().is_dir() {
            counts.directories += 1;
        } else {
            counts.files += 1;
        }
    }
    Ok(counts)
}
