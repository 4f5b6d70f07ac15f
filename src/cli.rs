// src/cli.rs

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  # Download a folder from the main branch
  ghfd https://github.com/user/repo/tree/main/src

  # Download a folder at a specific commit
  ghfd https://github.com/binnewbs/arch-hyprland/tree/03b85877996253b0518e8a57f6249a4d2dcf4697/.config/waybar

  # Download a folder at a tag, or from another branch
  ghfd https://github.com/user/repo/tree/v1.2.0/docs
  ghfd https://github.com/user/repo/tree/develop/src

  # Download the entire repository at a commit, into a custom location
  ghfd https://github.com/user/repo/tree/abc1234 ~/my_projects

The clone happens in a temporary directory that is always deleted afterwards.
Sparse-checkout is enabled only in that clone's local config; your global git
configuration and other repositories are never touched.";

/// Download a single folder (or a whole repository) from GitHub using git sparse-checkout.
///
/// ghfd clones the repository without file contents, restricts the checkout to
/// the requested folder, and copies the result to the output directory. The
/// destination is named after the folder (or repository), suffixed with the
/// branch, tag, or short commit id unless the revision is `main`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_long_help = EXAMPLES)]
#[command(propagate_version = true)]
pub struct Cli {
    /// GitHub repository, folder, or file URL (…/tree/<ref>/<path> or …/blob/<ref>/<path>).
    pub url: String,

    /// Output directory [default: ~/Downloads].
    pub output: Option<String>,

    /// Git executable to use.
    #[arg(long = "git", value_name = "PROGRAM", default_value = "git")]
    pub git_program: String,

    /// Directory in which the temporary clone is created [default: system temp dir].
    #[arg(long, value_name = "DIR")]
    pub workspace_dir: Option<String>,

    /// Do not show the progress spinner.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_progress: bool,

    /// Clone from `<URL>/<owner>/<repo>.git` instead of GitHub (mirrors, local fixtures).
    #[arg(long, value_name = "URL", hide = true)]
    pub remote_base: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_positional_arguments() {
        let cli = Cli::parse_from(["ghfd", "https://github.com/u/r/tree/main/src", "/tmp/out"]);
        assert_eq!(cli.url, "https://github.com/u/r/tree/main/src");
        assert_eq!(cli.output.as_deref(), Some("/tmp/out"));
        assert_eq!(cli.git_program, "git");
        assert!(!cli.no_progress);
    }

    #[test]
    fn test_cli_output_is_optional() {
        let cli = Cli::parse_from(["ghfd", "https://github.com/u/r"]);
        assert!(cli.output.is_none());
        assert!(cli.workspace_dir.is_none());
    }

    #[test]
    fn test_cli_requires_url() {
        assert!(Cli::try_parse_from(["ghfd"]).is_err());
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::parse_from([
            "ghfd",
            "https://github.com/u/r",
            "--git",
            "/usr/local/bin/git",
            "--workspace-dir",
            "/scratch",
            "--no-progress",
        ]);
        assert_eq!(cli.git_program, "/usr/local/bin/git");
        assert_eq!(cli.workspace_dir.as_deref(), Some("/scratch"));
        assert!(cli.no_progress);
        assert!(cli.remote_base.is_none());
    }

    #[test]
    fn test_cli_hidden_remote_base() {
        let cli = Cli::parse_from([
            "ghfd",
            "https://github.com/u/r",
            "--remote-base",
            "file:///srv/mirror",
        ]);
        assert_eq!(cli.remote_base.as_deref(), Some("file:///srv/mirror"));
    }
}
