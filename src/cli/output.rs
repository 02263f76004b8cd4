use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::core::{ChangeKind, DiffStats};
use crate::present::{
    LineAnnotation, LineHighlightMap, NumberedLine, PairedHighlightMaps, UnifiedHunk,
};
use crate::utils::{compress_ranges, digit_width, gutter};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output with colors
    #[default]
    Pretty,
    /// JSON output for machine consumption
    Json,
}

/// How a comparison is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// Every line with +/- markers and both line numbers
    #[default]
    Inline,
    /// Changed regions with context, as unified diff text
    Unified,
    /// Per-side line highlight maps for side-by-side panes
    Paired,
}

/// Format the inline view; `rows` carries the line numbers for the gutter
pub fn format_inline(
    annotations: &[LineAnnotation],
    rows: &[NumberedLine],
    stats: &DiffStats,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Pretty => format_inline_pretty(annotations, rows, stats),
        OutputFormat::Json => to_json(&serde_json::json!({
            "view": "inline",
            "annotations": annotations,
            "stats": stats,
        })),
    }
}

fn format_inline_pretty(
    annotations: &[LineAnnotation],
    rows: &[NumberedLine],
    stats: &DiffStats,
) -> String {
    let mut output = String::new();
    let width = digit_width(stats.original_total().max(stats.modified_total()));

    for (annotation, row) in annotations.iter().zip(rows) {
        let numbers = format!(
            "{} {} │",
            gutter(row.old_line, width),
            gutter(row.new_line, width)
        );
        output.push_str(&format!(
            "{} {}\n",
            numbers.dimmed(),
            colorize(row.kind, &annotation.render())
        ));
    }

    output.push_str(&format_stats_line(stats));
    output
}

/// Format the unified view; labels name the two sides in the file headers
pub fn format_unified(
    hunks: &[UnifiedHunk],
    old_label: &str,
    new_label: &str,
    stats: &DiffStats,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Pretty => format_unified_pretty(hunks, old_label, new_label, stats),
        OutputFormat::Json => to_json(&serde_json::json!({
            "view": "unified",
            "hunks": hunks,
            "stats": stats,
        })),
    }
}

fn format_unified_pretty(
    hunks: &[UnifiedHunk],
    old_label: &str,
    new_label: &str,
    stats: &DiffStats,
) -> String {
    let mut output = String::new();

    if !hunks.is_empty() {
        output.push_str(&format!("{}\n", format!("--- {}", old_label).bold()));
        output.push_str(&format!("{}\n", format!("+++ {}", new_label).bold()));
    }

    // Colors follow each line's kind, never its text
    for hunk in hunks {
        output.push_str(&format!("{}\n", hunk.header().cyan()));
        for line in &hunk.lines {
            output.push_str(&colorize(line.kind, &line.annotation().render()));
            output.push('\n');
        }
    }

    output.push_str(&format_stats_line(stats));
    output
}

/// Format the paired highlight view
pub fn format_paired(maps: &PairedHighlightMaps, stats: &DiffStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format_side("Original", &maps.original_map));
            output.push_str(&format_side("Modified", &maps.modified_map));
            output.push_str(&format_stats_line(stats));
            output
        }
        OutputFormat::Json => to_json(&serde_json::json!({
            "view": "paired",
            "original_map": maps.original_map,
            "modified_map": maps.modified_map,
            "stats": stats,
        })),
    }
}

fn format_side(label: &str, map: &LineHighlightMap) -> String {
    if map.is_empty() {
        return format!("{}: {}\n", label.bold(), "no highlighted lines".dimmed());
    }

    let mut classes: Vec<&str> = map.values().map(String::as_str).collect();
    classes.dedup();

    format!(
        "{}: lines {} [{}]\n",
        label.bold(),
        compress_ranges(map.keys().copied()),
        classes.join(", ").dimmed()
    )
}

/// Format line totals
pub fn format_stats(stats: &DiffStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => format_stats_line(stats),
        OutputFormat::Json => to_json(stats),
    }
}

fn format_stats_line(stats: &DiffStats) -> String {
    if !stats.has_changes() {
        return format!("{}\n", "No differences.".dimmed());
    }

    format!(
        "{} {} {}\n",
        format!("+{}", stats.added).green(),
        format!("-{}", stats.removed).red(),
        format!("({} unchanged)", stats.unchanged).dimmed()
    )
}

fn colorize(kind: ChangeKind, text: &str) -> String {
    match kind {
        ChangeKind::Added => text.green().to_string(),
        ChangeKind::Removed => text.red().to_string(),
        ChangeKind::Equal => text.to_string(),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
