//! Defines core data structures used throughout the download pipeline.
//!
//! A [`RepoReference`] is produced once from the input URL and flows unchanged
//! through checkout and placement. A [`Download`] describes the finished result.

use crate::constants::{COMMIT_HASH_LEN, DEFAULT_REVISION};
use std::fmt;
use std::path::PathBuf;

/// The kind of revision named by a URL, decided purely from its lexical shape.
///
/// # Examples
///
/// ```
/// use ghfd::core_types::RevisionKind;
///
/// assert_eq!(RevisionKind::classify("03b85877996253b0518e8a57f6249a4d2dcf4697"), RevisionKind::Commit);
/// assert_eq!(RevisionKind::classify("v1.2.0"), RevisionKind::Tag);
/// assert_eq!(RevisionKind::classify("develop"), RevisionKind::Branch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevisionKind {
    Branch,
    Tag,
    Commit,
}

impl RevisionKind {
    /// Classifies a revision string.
    ///
    /// Exactly 40 hex characters (any case) is a commit. Otherwise anything
    /// containing a dot or starting with `v` is a tag, and everything else is a
    /// branch. The commit check wins even when the string would also look like
    /// a tag.
    pub fn classify(revision: &str) -> Self {
        if revision.len() == COMMIT_HASH_LEN && revision.chars().all(|c| c.is_ascii_hexdigit()) {
            RevisionKind::Commit
        } else if revision.contains('.') || revision.starts_with('v') {
            RevisionKind::Tag
        } else {
            RevisionKind::Branch
        }
    }
}

impl fmt::Display for RevisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RevisionKind::Branch => "branch",
            RevisionKind::Tag => "tag",
            RevisionKind::Commit => "commit",
        };
        f.write_str(name)
    }
}

/// A structured reference to a folder (or whole repository) at a revision.
///
/// # Examples
///
/// ```
/// use ghfd::core_types::{RepoReference, RevisionKind};
///
/// let reference = RepoReference::new("user", "repo", "develop", "src/app");
/// assert_eq!(reference.revision_kind, RevisionKind::Branch);
/// assert_eq!(reference.clone_url("https://github.com"), "https://github.com/user/repo.git");
/// assert!(!reference.is_whole_repository());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    /// Repository owner (user or organization). Never empty.
    pub owner: String,
    /// Repository name without any `.git` suffix. Never empty.
    pub repo: String,
    /// Branch, tag, or commit id. Defaults to `main`.
    pub revision: String,
    /// Classification of `revision`.
    pub revision_kind: RevisionKind,
    /// Path inside the repository. Empty means the entire repository.
    pub path: String,
}

impl RepoReference {
    /// Builds a reference, classifying the revision.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        revision: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        let revision = revision.into();
        Self {
            owner: owner.into(),
            repo: repo.into(),
            revision_kind: RevisionKind::classify(&revision),
            revision,
            path: path.into(),
        }
    }

    /// Builds a reference to the default revision with no path.
    pub fn whole_repository(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::new(owner, repo, DEFAULT_REVISION, "")
    }

    /// The URL handed to `git clone`: `<base>/<owner>/<repo>.git`.
    pub fn clone_url(&self, remote_base: &str) -> String {
        format!(
            "{}/{}/{}.git",
            remote_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    pub fn is_whole_repository(&self) -> bool {
        self.path.is_empty()
    }

    /// True for the implicit default: the `main` branch.
    pub fn is_default_revision(&self) -> bool {
        self.revision_kind == RevisionKind::Branch && self.revision == DEFAULT_REVISION
    }
}

/// File and directory counts under a destination, for display only.
///
/// # Examples
///
/// ```
/// use ghfd::core_types::TreeCounts;
///
/// let counts: TreeCounts = Default::default();
/// assert_eq!(counts.files, 0);
/// assert_eq!(counts.directories, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCounts {
    /// Non-directory entries (regular files and symlinks).
    pub files: usize,
    /// Directories, not counting the destination itself.
    pub directories: usize,
}

/// The outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Download {
    /// What was downloaded.
    pub reference: RepoReference,
    /// Absolute path of the destination directory.
    pub destination: PathBuf,
    /// Counts under `destination`.
    pub counts: TreeCounts,
    /// The version string reported by the git executable.
    pub git_version: String,
}
