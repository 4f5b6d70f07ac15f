//! A recording, scripted `GitRunner` for unit tests.

use super::ops::{GitOutput, GitRunner};
use crate::cancellation::CancellationToken;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::Path;

/// Records every invocation as its space-joined arguments and answers from a script.
///
/// `clone` creates the destination with a `.git` directory, `checkout` writes
/// the configured files into the clone, `cat-file` succeeds unless
/// [`FakeGit::without_object`] was used, and everything else succeeds unless
/// named in [`FakeGit::failing_on`]. [`FakeGit::cancelling_after`] cancels a
/// token once the named subcommand has completed, as a Ctrl+C would.
pub(crate) struct FakeGit {
    calls: RefCell<Vec<String>>,
    fail_on: Option<(&'static str, &'static str)>,
    object_present: bool,
    available: bool,
    files: Vec<(&'static str, &'static str)>,
    cancel_after: Option<(&'static str, CancellationToken)>,
}

impl FakeGit {
    pub(crate) fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
            object_present: true,
            available: true,
            files: Vec::new(),
            cancel_after: None,
        }
    }

    /// Every call fails to spawn, as if git were not installed.
    pub(crate) fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub(crate) fn failing_on(mut self, subcommand: &'static str, stderr: &'static str) -> Self {
        self.fail_on = Some((subcommand, stderr));
        self
    }

    pub(crate) fn cancelling_after(
        mut self,
        subcommand: &'static str,
        token: &CancellationToken,
    ) -> Self {
        self.cancel_after = Some((subcommand, token.clone()));
        self
    }

    pub(crate) fn without_object(mut self) -> Self {
        self.object_present = false;
        self
    }

    /// A file materialized by `checkout`, relative to the clone root.
    pub(crate) fn with_file(mut self, path: &'static str, content: &'static str) -> Self {
        self.files.push((path, content));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> io::Result<GitOutput> {
        self.calls.borrow_mut().push(args.join(" "));
        if !self.available {
            return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
        }

        let subcommand = args.first().copied().unwrap_or_default();
        if let Some((failing, stderr)) = self.fail_on {
            if failing == subcommand {
                return Ok(GitOutput::failed(stderr));
            }
        }

        let cwd = cwd.unwrap_or_else(|| Path::new("."));
        let output = match subcommand {
            "--version" => Ok(GitOutput::ok("git version 2.45.2\n")),
            "clone" => {
                let dest = args.last().copied().unwrap_or_default();
                fs::create_dir_all(cwd.join(dest).join(".git"))?;
                Ok(GitOutput::ok(""))
            }
            "cat-file" if !self.object_present => Ok(GitOutput::failed(
                "fatal: Not a valid object name",
            )),
            "checkout" => {
                for (path, content) in &self.files {
                    let target = cwd.join(path);
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(target, content)?;
                }
                Ok(GitOutput::ok(""))
            }
            _ => Ok(GitOutput::ok("")),
        };

        if let Some((trigger, token)) = &self.cancel_after {
            if *trigger == subcommand {
                token.cancel();
            }
        }
        output
    }
}
