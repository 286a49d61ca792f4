//! Command-line interface for timeline.

use std::path::PathBuf;

use clap::Parser;

/// Timeline - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults are used if it is missing)
    #[arg(short, long, default_value = "timeline.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not capture the mouse; play with the keyboard only
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["timeline"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("timeline.toml"));
        assert_eq!(cli.log_file, None);
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "timeline",
            "--config",
            "custom.toml",
            "--log-file",
            "/tmp/t.log",
            "--no-mouse",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/t.log")));
        assert!(cli.no_mouse);
    }
}
