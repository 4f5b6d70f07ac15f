// src/output/summary.rs

use crate::config::Config;
use crate::core_types::Download;
use std::io::{self, Write};

/// Writes the completion summary for a finished download.
pub fn write_summary(writer: &mut dyn Write, download: &Download) -> io::Result<()> {
    log::debug!("Writing summary for '{}'", download.destination.display());
    let reference = &download.reference;
    writeln!(writer, "Download completed!")?;
    writeln!(writer, "Directories: {}", download.counts.directories)?;
    writeln!(writer, "Files: {}", download.counts.files)?;
    writeln!(writer, "Location: {}", download.destination.display())?;
    writeln!(
        writer,
        "Git reference: {} ({})",
        reference.revision, reference.revision_kind
    )?;
    writeln!(writer, "Using: {}", download.git_version)?;
    Ok(())
}

/// Writes the pre-download description of what is about to be fetched.
pub fn write_plan(writer: &mut dyn Write, config: &Config) -> io::Result<()> {
    let reference = &config.reference;
    writeln!(writer, "Source: {}", config.url)?;
    writeln!(writer, "Repository: {}/{}", reference.owner, reference.repo)?;
    writeln!(
        writer,
        "Git reference: {} ({})",
        reference.revision, reference.revision_kind
    )?;
    if reference.is_whole_repository() {
        writeln!(writer, "Target folder: (entire repository)")?;
    } else {
        writeln!(writer, "Target folder: {}", reference.path)?;
    }
    writeln!(writer, "Clone URL: {}", config.clone_url())?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{RepoReference, TreeCounts};
    use crate::ConfigBuilder;
    use std::path::PathBuf;

    #[test]
    fn test_write_summary() {
        let download = Download {
            reference: RepoReference::new(
                "binnewbs",
                "arch-hyprland",
                "03b85877996253b0518e8a57f6249a4d2dcf4697",
                ".config/waybar",
            ),
            destination: PathBuf::from("/home/me/Downloads/waybar_03b85877"),
            counts: TreeCounts {
                files: 7,
                directories: 2,
            },
            git_version: "git version 2.45.2".to_string(),
        };
        let mut out = Vec::new();
        write_summary(&mut out, &download).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Download completed!\n"));
        assert!(text.contains("Directories: 2\n"));
        assert!(text.contains("Files: 7\n"));
        assert!(text.contains("Location: /home/me/Downloads/waybar_03b85877\n"));
        assert!(text.contains(
            "Git reference: 03b85877996253b0518e8a57f6249a4d2dcf4697 (commit)\n"
        ));
        assert!(text.ends_with("Using: git version 2.45.2\n"));
    }

    #[test]
    fn test_write_plan_whole_repository() {
        let config = ConfigBuilder::new()
            .url("https://github.com/user/repo/tree/v1.2.0")
            .output_dir("/tmp/out")
            .build()
            .unwrap();
        let mut out = Vec::new();
        write_plan(&mut out, &config).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Source: https://github.com/user/repo/tree/v1.2.0\n"));
        assert!(text.contains("Repository: user/repo\n"));
        assert!(text.contains("Git reference: v1.2.0 (tag)\n"));
        assert!(text.contains("Target folder: (entire repository)\n"));
        assert!(text.contains("Clone URL: https://github.com/user/repo.git\n"));
    }
}
