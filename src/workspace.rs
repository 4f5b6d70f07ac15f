//! The scratch workspace that holds the temporary clone.
//!
//! A [`Workspace`] wraps a `tempfile::TempDir`. It is removed when dropped, so
//! every exit path of the pipeline (success, error, or interruption) cleans it
//! up. [`Workspace::close`] does the same but reports a failed removal.

use crate::constants::WORKSPACE_PREFIX;
use crate::errors::{io_error_with_path, Result};
use std::path::{Path, PathBuf};
use tempfile::{Builder as TempDirBuilder, TempDir};

/// An exclusively-owned temporary directory for one run.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates a workspace in the system temporary directory.
    pub fn create() -> Result<Self> {
        Self::create_in(std::env::temp_dir())
    }

    /// Creates a workspace inside `parent`, which must already exist.
    pub fn create_in(parent: impl AsRef<Path>) -> Result<Self> {
        let parent = parent.as_ref();
        let dir = TempDirBuilder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| io_error_with_path(e, parent))?;
        log::debug!("Created scratch workspace at '{}'", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the clone of `repo` lives inside the workspace.
    pub fn clone_dir(&self, repo: &str) -> PathBuf {
        self.dir.path().join(repo)
    }

    /// Removes the workspace now, returning any removal error.
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|e| io_error_with_path(e, &path))?;
        log::debug!("Removed scratch workspace '{}'", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_workspace_removed_on_drop() -> anyhow::Result<()> {
        let parent = tempdir()?;
        let path = {
            let workspace = Workspace::create_in(parent.path())?;
            fs::create_dir_all(workspace.clone_dir("repo").join(".git"))?;
            fs::write(workspace.clone_dir("repo").join("file.txt"), "x")?;
            workspace.path().to_path_buf()
        };
        assert!(!path.exists());
        assert_eq!(fs::read_dir(parent.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_workspace_close() -> anyhow::Result<()> {
        let parent = tempdir()?;
        let workspace = Workspace::create_in(parent.path())?;
        let path = workspace.path().to_path_buf();
        assert!(path.starts_with(parent.path()));
        assert!(path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(WORKSPACE_PREFIX)));
        workspace.close()?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_workspace_in_missing_parent_fails() {
        let parent = tempdir().unwrap();
        let missing = parent.path().join("nope");
        assert!(Workspace::create_in(&missing).is_err());
    }
}
