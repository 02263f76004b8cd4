//! Side-by-side line highlight maps
//!
//! Each side of a comparison gets its own sparse map from 1-based line number
//! to a style class, so two independent editor panes can be decorated
//! without knowing about each other's content.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::segment::{validate_segments, ChangeKind, ChangeSegment, SegmentError};

/// Sparse map from 1-based line number to style class
pub type LineHighlightMap = BTreeMap<usize, String>;

/// Class names applied to changed lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyles {
    /// Class for lines only present in the modified text
    pub added: String,
    /// Class for lines only present in the original text
    pub removed: String,
}

impl Default for HighlightStyles {
    fn default() -> Self {
        Self {
            added: "added-style".to_string(),
            removed: "removed-style".to_string(),
        }
    }
}

/// Highlight maps for the original and modified panes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedHighlightMaps {
    /// Indexed by original-text line numbers; removed lines only
    pub original_map: LineHighlightMap,
    /// Indexed by modified-text line numbers; added lines only
    pub modified_map: LineHighlightMap,
}

impl PairedHighlightMaps {
    pub fn is_empty(&self) -> bool {
        self.original_map.is_empty() && self.modified_map.is_empty()
    }
}

/// Build highlight maps using the default class names
pub fn to_paired_highlight_maps(
    segments: &[ChangeSegment],
) -> Result<PairedHighlightMaps, SegmentError> {
    to_paired_highlight_maps_with(segments, &HighlightStyles::default())
}

/// Build highlight maps using the given class names
pub fn to_paired_highlight_maps_with(
    segments: &[ChangeSegment],
    styles: &HighlightStyles,
) -> Result<PairedHighlightMaps, SegmentError> {
    validate_segments(segments)?;

    let mut maps = PairedHighlightMaps::default();
    let mut original_line = 1usize;
    let mut modified_line = 1usize;

    for segment in segments {
        match segment.kind {
            ChangeKind::Equal => {
                original_line += segment.count;
                modified_line += segment.count;
            }
            ChangeKind::Removed => {
                mark_lines(
                    &mut maps.original_map,
                    "original",
                    original_line,
                    segment.count,
                    &styles.removed,
                )?;
                original_line += segment.count;
            }
            ChangeKind::Added => {
                mark_lines(
                    &mut maps.modified_map,
                    "modified",
                    modified_line,
                    segment.count,
                    &styles.added,
                )?;
                modified_line += segment.count;
            }
        }
    }

    debug!(
        original_entries = maps.original_map.len(),
        modified_entries = maps.modified_map.len(),
        "built paired highlight maps"
    );

    Ok(maps)
}

fn mark_lines(
    map: &mut LineHighlightMap,
    side: &'static str,
    start: usize,
    count: usize,
    class: &str,
) -> Result<(), SegmentError> {
    for line in start..start + count {
        if map.insert(line, class.to_string()).is_some() {
            return Err(SegmentError::HighlightCollision { side, line });
        }
    }
    Ok(())
}
