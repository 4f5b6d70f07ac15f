// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn ghfd_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghfd"));
    cmd.env("RUST_LOG", "off");
    cmd
}

/// Whether a `git` executable can be run on this machine.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
