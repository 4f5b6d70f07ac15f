// src/constants.rs

/// Marker that every accepted input URL must contain.
pub const GITHUB_HOST_MARKER: &str = "github.com";

/// Base URL used to build clone URLs (`<base>/<owner>/<repo>.git`).
pub const DEFAULT_REMOTE_BASE: &str = "https://github.com";

/// Revision assumed when the URL names none. Also the one branch name that
/// gets no suffix on the destination directory.
pub const DEFAULT_REVISION: &str = "main";

/// Length of a full hexadecimal commit id.
pub const COMMIT_HASH_LEN: usize = 40;

/// Number of commit-id characters used in destination suffixes.
pub const COMMIT_SUFFIX_LEN: usize = 8;

/// Name of the version-control metadata directory skipped in whole-repository copies.
pub const GIT_METADATA_DIR: &str = ".git";

/// Default output directory, relative to the user's home directory.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "Downloads";

/// Prefix for scratch workspace directories.
pub const WORKSPACE_PREFIX: &str = "ghfd-";
