// src/git/ops.rs
//! Low-level git command execution.
//!
//! The orchestrator only needs "run a git command, capture success, stdout and
//! stderr". [`GitRunner`] is that capability; [`SystemGit`] provides it by
//! spawning the git executable, and tests substitute a recording fake.

use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    /// Whether the command exited with status 0.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// A successful result with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed result with the given stderr.
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// The most useful diagnostic text: stderr, else stdout, else a placeholder.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        "command exited unsuccessfully with no output".to_string()
    }
}

/// Runs git commands. Blocking: each call returns only after the command exits.
pub trait GitRunner {
    /// Runs `git <args>` in `cwd` (or the current directory when `None`).
    ///
    /// An `Err` means the command could not be started at all; a command that
    /// ran and failed is an `Ok` with `success == false`.
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> io::Result<GitOutput>;

    /// Name of the executable, for error messages.
    fn program_name(&self) -> String {
        "git".to_string()
    }
}

impl<G: GitRunner + ?Sized> GitRunner for &G {
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> io::Result<GitOutput> {
        (**self).run(args, cwd)
    }

    fn program_name(&self) -> String {
        (**self).program_name()
    }
}

/// A [`GitRunner`] backed by the git executable found on `PATH` (or an explicit path).
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
}

impl SystemGit {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for SystemGit {
    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> io::Result<GitOutput> {
        debug!("Running: {} {}", self.program.display(), args.join(" "));
        let mut command = Command::new(&self.program);
        command
            .args(args)
            // Fail instead of blocking on a credential prompt for private or missing repos.
            .env("GIT_TERMINAL_PROMPT", "0");
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output()?;
        let result = GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        if !result.success {
            debug!(
                "git {} exited with {}: {}",
                args.first().copied().unwrap_or_default(),
                output.status,
                result.diagnostic()
            );
        }
        Ok(result)
    }
}
