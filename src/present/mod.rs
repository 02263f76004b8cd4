//! Presentation of diff segments
//!
//! Turns a segment sequence into render-ready data: inline annotations for a
//! unified view, per-side highlight maps for paired editors, and hunks with
//! context for plain-text unified output. Every entry point validates the
//! sequence first and rejects malformed input with a [`SegmentError`].
//!
//! [`SegmentError`]: crate::core::SegmentError

pub mod inline;
pub mod paired;
pub mod unified;

pub use inline::{prefix_for, to_inline_annotations, LineAnnotation, StyleClass};
pub use paired::{
    to_paired_highlight_maps, to_paired_highlight_maps_with, HighlightStyles, LineHighlightMap,
    PairedHighlightMaps,
};
pub use unified::{number_lines, render_unified, to_unified_hunks, NumberedLine, UnifiedHunk};
