use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::cli::terminal::Palette;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Where to write the configuration file
    #[arg(default_value = "hotel.toml")]
    path: PathBuf,

    /// Overwrite an existing file
    #[arg(long, short)]
    force: bool,
}

impl Command {
    #[instrument]
    pub fn run(self) -> anyhow::Result<()> {
        if self.path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite it)",
                self.path.display()
            );
        }

        let config = hotel::Config::default();
        config
            .save(&self.path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", self.path.display()))?;

        let palette = Palette::detect();
        println!(
            "{}",
            palette.success(&format!("✅ Created {}", self.path.display()))
        );
        for room in config.rooms() {
            println!("  • {} ({})", room.number, room.room_type);
        }
        println!();
        println!("Next steps:");
        println!("  Edit the rooms, then run: hotel --config {}", display(&self.path));

        Ok(())
    }
}

fn display(path: &Path) -> String {
    let text = path.display().to_string();
    if text.contains(' ') {
        format!("\"{text}\"")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn writes_default_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hotel.toml");

        Command::parse_from(["init", path.to_str().unwrap()])
            .run()
            .unwrap();

        assert_eq!(hotel::Config::load(&path).unwrap(), hotel::Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hotel.toml");
        std::fs::write(&path, "keep me").unwrap();

        let err = Command::parse_from(["init", path.to_str().unwrap()])
            .run()
            .unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        Command::parse_from(["init", "--force", path.to_str().unwrap()])
            .run()
            .unwrap();
        assert!(hotel::Config::load(&path).is_ok());
    }

    #[test]
    fn quotes_paths_with_spaces() {
        assert_eq!(display(Path::new("my hotel.toml")), "\"my hotel.toml\"");
        assert_eq!(display(Path::new("hotel.toml")), "hotel.toml");
    }
}
