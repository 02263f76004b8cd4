pub mod compare;
pub mod output;
pub mod pager;
pub mod stats;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::LinediffConfig;

/// Line-level diff with inline, unified and side-by-side highlight views
#[derive(Debug, Parser)]
#[command(name = "linediff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two files line by line
    Compare(compare::CompareArgs),

    /// Count added, removed and unchanged lines between two files
    Stats(stats::StatsArgs),
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compare(args) => compare::run(args),
        Commands::Stats(args) => stats::run(args),
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`, or by `-v` when unset
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load config from an explicit path, or via the usual lookup from the working directory
pub(crate) fn resolve_config(path: Option<&Path>) -> Result<LinediffConfig> {
    match path {
        Some(path) => LinediffConfig::load_from_file(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine working directory")?;
            LinediffConfig::load(&cwd)
        }
    }
}

pub(crate) fn apply_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Read both sides of a comparison; at most one may come from stdin
pub(crate) fn read_pair(original: &Path, modified: &Path) -> Result<(String, String)> {
    if is_stdin(original) && is_stdin(modified) {
        anyhow::bail!("Only one of the compared inputs can be read from stdin");
    }

    Ok((read_input(original)?, read_input(modified)?))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> Result<String> {
    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    String::from_utf8(bytes).with_context(|| {
        format!(
            "{} is not valid UTF-8 text; only text files can be compared",
            path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_compare() {
        let cli = Cli::try_parse_from([
            "linediff",
            "compare",
            "old.txt",
            "new.txt",
            "--view",
            "paired",
            "--format",
            "json",
            "--algorithm",
            "patience",
            "-U",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.view, output::ViewMode::Paired);
                assert_eq!(args.format, output::OutputFormat::Json);
                assert_eq!(args.algorithm, Some(crate::core::DiffAlgorithm::Patience));
                assert_eq!(args.context, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let cli = Cli::try_parse_from(["linediff", "stats", "a", "b", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_read_input_rejects_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_input(&path).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_read_pair_rejects_double_stdin() {
        let err = read_pair(Path::new("-"), Path::new("-")).unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }

    #[test]
    fn test_resolve_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[diff]\ncontext_lines = 7\n").unwrap();

        let config = resolve_config(Some(&path)).unwrap();
        assert_eq!(config.diff.context_lines, 7);
    }
}
