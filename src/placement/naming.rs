// src/placement/naming.rs

use crate::constants::COMMIT_SUFFIX_LEN;
use crate::core_types::{RepoReference, RevisionKind};

/// The revision-derived suffix for a destination name, if any.
///
/// Commits use their first 8 characters, tags replace `/` with `_`, branches
/// are used as-is. The default `main` branch gets no suffix.
pub fn revision_suffix(reference: &RepoReference) -> Option<String> {
    let revision = reference.revision.as_str();
    match reference.revision_kind {
        RevisionKind::Commit => Some(revision[..COMMIT_SUFFIX_LEN.min(revision.len())].to_string()),
        RevisionKind::Tag => Some(revision.replace('/', "_")),
        RevisionKind::Branch if reference.is_default_revision() => None,
        RevisionKind::Branch => Some(revision.to_string()),
    }
}

/// The final directory name under the output root.
///
/// The base is the last component of the in-repository path, or the
/// repository name for whole-repository downloads.
///
/// # Examples
/// ```
/// use ghfd::core_types::RepoReference;
/// use ghfd::placement::destination_name;
///
/// let reference = RepoReference::new("o", "r", "03b85877996253b0518e8a57f6249a4d2dcf4697", ".config/waybar");
/// assert_eq!(destination_name(&reference), "waybar_03b85877");
/// ```
pub fn destination_name(reference: &RepoReference) -> String {
    let base = reference
        .path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(reference.repo.as_str());
    match revision_suffix(reference) {
        Some(suffix) => format!("{}_{}", base, suffix),
        None => base.to_string(),
    }
}
