//! Line-level diffing with render-ready presentations.
//!
//! [`compute_line_diff`] produces maximal runs of equal, added and removed
//! lines; the [`present`] module turns them into inline annotations, paired
//! per-side highlight maps, or unified hunks.

pub mod cli;
pub mod config;
pub mod core;
pub mod present;
pub mod utils;

pub use crate::config::LinediffConfig;
pub use crate::core::{
    compute_line_diff, compute_line_diff_with, ChangeKind, ChangeSegment, DiffAlgorithm,
    DiffOptions, DiffStats, SegmentError,
};
pub use crate::present::{
    to_inline_annotations, to_paired_highlight_maps, LineAnnotation, LineHighlightMap,
    PairedHighlightMaps, StyleClass,
};
