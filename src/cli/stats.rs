use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::output::{format_stats, OutputFormat};
use crate::cli::{apply_color, read_pair, resolve_config};
use crate::core::{compute_line_diff_with, DiffAlgorithm, DiffStats};

/// Stats command arguments
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Original file ("-" for stdin)
    pub original: PathBuf,

    /// Modified file ("-" for stdin)
    pub modified: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Line matching algorithm (overrides config)
    #[arg(long, value_enum)]
    pub algorithm: Option<DiffAlgorithm>,

    /// Config file to use instead of the usual lookup
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors in output
    #[arg(long)]
    pub no_color: bool,
}

/// Run the stats command
pub fn run(args: StatsArgs) -> Result<()> {
    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(algorithm) = args.algorithm {
        config.diff.algorithm = algorithm;
    }
    apply_color(config.output.color && !args.no_color);

    let (original, modified) = read_pair(&args.original, &args.modified)?;
    let segments = compute_line_diff_with(&original, &modified, &config.diff.options());
    let stats = DiffStats::from_segments(&segments);

    print!("{}", format_stats(&stats, args.format));
    if args.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
