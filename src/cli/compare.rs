use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::cli::output::{format_inline, format_paired, format_unified, OutputFormat, ViewMode};
use crate::cli::{apply_color, pager, read_pair, resolve_config};
use crate::core::{compute_line_diff_with, DiffAlgorithm, DiffStats};
use crate::present::{
    number_lines, to_inline_annotations, to_paired_highlight_maps_with, to_unified_hunks,
};

/// Compare command arguments
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Original file ("-" for stdin)
    pub original: PathBuf,

    /// Modified file ("-" for stdin)
    pub modified: PathBuf,

    /// How to present the comparison
    #[arg(long, value_enum, default_value_t = ViewMode::Inline)]
    pub view: ViewMode,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Line matching algorithm (overrides config)
    #[arg(long, value_enum)]
    pub algorithm: Option<DiffAlgorithm>,

    /// Unchanged lines around each change in the unified view (overrides config)
    #[arg(short = 'U', long)]
    pub context: Option<usize>,

    /// Config file to use instead of the usual lookup
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors in output
    #[arg(long)]
    pub no_color: bool,

    /// Bypass the pager and output directly to stdout
    #[arg(long)]
    pub no_pager: bool,
}

/// Run the compare command
pub fn run(args: CompareArgs) -> Result<()> {
    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(algorithm) = args.algorithm {
        config.diff.algorithm = algorithm;
    }
    if let Some(context) = args.context {
        config.diff.context_lines = context;
    }
    apply_color(config.output.color && !args.no_color);

    let (original, modified) = read_pair(&args.original, &args.modified)?;

    let segments = compute_line_diff_with(&original, &modified, &config.diff.options());
    let stats = DiffStats::from_segments(&segments);
    debug!(segments = segments.len(), ?stats, view = ?args.view, "comparison ready");

    let output = match args.view {
        ViewMode::Inline => {
            let annotations = to_inline_annotations(&segments)?;
            let rows = number_lines(&segments)?;
            format_inline(&annotations, &rows, &stats, args.format)
        }
        ViewMode::Unified => {
            let hunks = to_unified_hunks(&segments, config.diff.context_lines)?;
            format_unified(
                &hunks,
                &args.original.display().to_string(),
                &args.modified.display().to_string(),
                &stats,
                args.format,
            )
        }
        ViewMode::Paired => {
            let maps = to_paired_highlight_maps_with(&segments, &config.highlight)?;
            format_paired(&maps, &stats, args.format)
        }
    };

    match args.format {
        OutputFormat::Json => {
            println!("{}", output);
            Ok(())
        }
        OutputFormat::Pretty => pager::emit(&output, config.output.pager && !args.no_pager),
    }
}
