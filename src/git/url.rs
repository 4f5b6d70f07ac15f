//! Handles parsing of GitHub folder and file URLs.

use crate::constants::{DEFAULT_REVISION, GITHUB_HOST_MARKER};
use crate::core_types::RepoReference;
use crate::errors::{Error, Result};
use url::{ParseError, Url};

/// Checks if a given string looks like a GitHub URL.
///
/// This is the cheap pre-check done before any parsing; it does not validate the format.
///
/// # Examples
/// ```
/// use ghfd::git::is_github_url;
///
/// assert!(is_github_url("https://github.com/user/repo/tree/main/src"));
/// assert!(is_github_url("github.com/user/repo"));
/// assert!(!is_github_url("https://gitlab.com/user/repo"));
/// ```
pub fn is_github_url(input: &str) -> bool {
    input.contains(GITHUB_HOST_MARKER)
}

/// Parses a GitHub repository, folder, or file URL into a [`RepoReference`].
///
/// The path must start with `<owner>/<repo>`. When it continues with
/// `tree/<revision>` or `blob/<revision>`, the revision is taken from there and
/// any remaining segments form the in-repository path. Both forms are treated
/// the same. Anything else after `<owner>/<repo>` is ignored and the whole
/// repository at `main` is assumed.
///
/// Trailing slashes, query strings, fragments, empty segments and a `.git`
/// suffix on the repository name are tolerated. Input without a scheme is read
/// as `https://`.
///
/// # Errors
/// Returns `Error::InvalidUrl` if the input is not a URL or has fewer than two
/// path segments.
///
/// # Examples
/// ```
/// use ghfd::git::parse_github_url;
/// use ghfd::core_types::RevisionKind;
///
/// let url = "https://github.com/binnewbs/arch-hyprland/tree/03b85877996253b0518e8a57f6249a4d2dcf4697/.config/waybar";
/// let reference = parse_github_url(url).unwrap();
///
/// assert_eq!(reference.owner, "binnewbs");
/// assert_eq!(reference.repo, "arch-hyprland");
/// assert_eq!(reference.revision_kind, RevisionKind::Commit);
/// assert_eq!(reference.path, ".config/waybar");
///
/// // A bare repository URL means the whole repository on `main`.
/// let root = parse_github_url("https://github.com/rust-lang/cargo/").unwrap();
/// assert_eq!(root.revision, "main");
/// assert!(root.path.is_empty());
/// ```
pub fn parse_github_url(input: &str) -> Result<RepoReference> {
    let trimmed = input.trim().trim_end_matches('/');
    let url = parse_lenient(trimmed).map_err(|e| invalid(input, e.to_string()))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    if segments.len() < 2 {
        return Err(invalid(
            input,
            "expected at least an owner and a repository in the path",
        ));
    }

    let owner = segments[0];
    let repo = segments[1].strip_suffix(".git").unwrap_or(segments[1]);
    if repo.is_empty() {
        return Err(invalid(input, "repository name is empty"));
    }

    let (revision, path) = match segments.get(2..4) {
        Some([kind, revision]) if *kind == "tree" || *kind == "blob" => {
            (*revision, segments[4..].join("/"))
        }
        _ => (DEFAULT_REVISION, String::new()),
    };

    let reference = RepoReference::new(owner, repo, revision, path);
    log::debug!("Parsed GitHub URL '{}' into {:?}", input, reference);
    Ok(reference)
}

/// Parses `input`, retrying with an `https://` prefix when it has no scheme.
fn parse_lenient(input: &str) -> std::result::Result<Url, ParseError> {
    match Url::parse(input) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", input)),
        other => other,
    }
}

fn invalid(url: &str, reason: impl Into<String>) -> Error {
    Error::InvalidUrl {
        url: url.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::RevisionKind;

    fn parse(url: &str) -> RepoReference {
        parse_github_url(url).unwrap()
    }

    #[test]
    fn test_parse_repository_root_defaults_to_main() {
        let reference = parse("https://github.com/BurntSushi/ripgrep");
        assert_eq!(
            reference,
            RepoReference {
                owner: "BurntSushi".to_string(),
                repo: "ripgrep".to_string(),
                revision: "main".to_string(),
                revision_kind: RevisionKind::Branch,
                path: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_tree_url_with_nested_path() {
        let reference = parse("https://github.com/BurntSushi/ripgrep/tree/master/crates/ignore");
        assert_eq!(reference.revision, "master");
        assert_eq!(reference.revision_kind, RevisionKind::Branch);
        assert_eq!(reference.path, "crates/ignore");
    }

    #[test]
    fn test_parse_blob_url_same_as_tree() {
        let tree = parse("https://github.com/user/repo/tree/v1.2.0/docs/guide.md");
        let blob = parse("https://github.com/user/repo/blob/v1.2.0/docs/guide.md");
        assert_eq!(tree, blob);
        assert_eq!(blob.revision_kind, RevisionKind::Tag);
        assert_eq!(blob.path, "docs/guide.md");
    }

    #[test]
    fn test_parse_tree_url_without_path_is_whole_repository() {
        let reference = parse("https://github.com/user/repo/tree/develop");
        assert_eq!(reference.revision, "develop");
        assert!(reference.is_whole_repository());
    }

    #[test]
    fn test_parse_tree_without_revision_keeps_defaults() {
        let reference = parse("https://github.com/user/repo/tree");
        assert_eq!(reference.revision, "main");
        assert!(reference.path.is_empty());
    }

    #[test]
    fn test_parse_other_third_segment_is_ignored() {
        let reference = parse("https://github.com/user/repo/issues/12");
        assert_eq!(reference.revision, "main");
        assert!(reference.path.is_empty());
    }

    #[test]
    fn test_parse_trailing_slash_tolerated() {
        let with = parse("https://github.com/user/repo/tree/develop/src/");
        let without = parse("https://github.com/user/repo/tree/develop/src");
        assert_eq!(with, without);
        assert_eq!(with.path, "src");
    }

    #[test]
    fn test_parse_commit_url() {
        let reference = parse(
            "https://github.com/binnewbs/arch-hyprland/tree/03b85877996253b0518e8a57f6249a4d2dcf4697/.config/waybar",
        );
        assert_eq!(reference.revision_kind, RevisionKind::Commit);
        assert_eq!(reference.path, ".config/waybar");
    }

    #[test]
    fn test_parse_without_scheme() {
        let reference = parse("github.com/user/repo/tree/develop/src");
        assert_eq!(reference.owner, "user");
        assert_eq!(reference.repo, "repo");
        assert_eq!(reference.path, "src");
    }

    #[test]
    fn test_parse_strips_git_suffix_query_and_fragment() {
        let reference = parse("https://github.com/user/repo.git");
        assert_eq!(reference.repo, "repo");

        let reference = parse("https://github.com/user/repo/tree/main/src?plain=1#readme");
        assert_eq!(reference.path, "src");
    }

    #[test]
    fn test_parse_rejects_missing_repo() {
        for url in [
            "https://github.com",
            "https://github.com/",
            "https://github.com/only-owner",
            "https://github.com/owner/.git",
        ] {
            match parse_github_url(url) {
                Err(Error::InvalidUrl { .. }) => {}
                other => panic!("Expected InvalidUrl for {}, got {:?}", url, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_github_url("https://[github.com/user/repo"),
            Err(Error::InvalidUrl { .. })
        ));
    }
}
