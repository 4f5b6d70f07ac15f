use super::{
    path_resolve::{expand_home, resolve_output_dir},
    validation::{validate_output_dir, validate_url},
    Config,
};
use crate::cli::Cli;
use crate::constants::DEFAULT_REMOTE_BASE;
use crate::errors::{Error, Result};
use crate::git::parse_github_url;
use std::path::PathBuf;

/// A builder for creating a `Config` instance.
///
/// # Examples
///
/// ```
/// use ghfd::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .url("https://github.com/user/repo/tree/develop/src")
///     .output_dir("/tmp/ghfd-out")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.reference.revision, "develop");
/// assert_eq!(config.clone_url(), "https://github.com/user/repo.git");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    url: Option<String>,
    output_dir: Option<String>,
    git_program: Option<String>,
    workspace_dir: Option<String>,
    remote_base: Option<String>,
    no_progress: bool,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            url: Some(cli.url),
            output_dir: cli.output,
            git_program: Some(cli.git_program),
            workspace_dir: cli.workspace_dir,
            remote_base: cli.remote_base,
            no_progress: cli.no_progress,
        }
    }

    /// Sets the GitHub URL to download.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the output root. A leading `~` is expanded.
    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Sets the git executable.
    pub fn git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = Some(program.into());
        self
    }

    /// Sets the parent directory of the scratch workspace.
    pub fn workspace_dir(mut self, dir: impl Into<String>) -> Self {
        self.workspace_dir = Some(dir.into());
        self
    }

    /// Overrides the base used to build clone URLs.
    #[doc(hidden)]
    pub fn remote_base(mut self, base: impl Into<String>) -> Self {
        self.remote_base = Some(base.into());
        self
    }

    /// Disables the progress spinner.
    pub fn no_progress(mut self, no_progress: bool) -> Self {
        self.no_progress = no_progress;
        self
    }

    /// Validates the settings and builds the `Config`.
    ///
    /// # Errors
    /// `Error::InvalidUrl` if the URL is missing the GitHub host marker or
    /// cannot be parsed; `Error::Config` for other invalid settings.
    pub fn build(self) -> Result<Config> {
        let url = self
            .url
            .ok_or_else(|| Error::Config("A GitHub URL is required.".to_string()))?;
        validate_url(&url)?;
        let reference = parse_github_url(&url)?;

        let output_dir = resolve_output_dir(self.output_dir.as_deref())?;
        validate_output_dir(&output_dir)?;
        let workspace_dir = self
            .workspace_dir
            .as_deref()
            .map(expand_home)
            .transpose()?;

        Ok(Config {
            url,
            reference,
            output_dir,
            git_program: PathBuf::from(self.git_program.unwrap_or_else(|| "git".to_string())),
            workspace_dir,
            remote_base: resolve_remote_base(self.remote_base),
            show_progress: !self.no_progress,
        })
    }
}

fn resolve_remote_base(base: Option<String>) -> String {
    match base.filter(|b| !b.trim().is_empty()) {
        Some(base) if base != DEFAULT_REMOTE_BASE => {
            log::warn!("Cloning from '{}' instead of {}", base, DEFAULT_REMOTE_BASE);
            base
        }
        _ => DEFAULT_REMOTE_BASE.to_string(),
    }
}
