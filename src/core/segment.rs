use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a run of lines in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present in both texts
    Equal,
    /// Only present in the modified text
    Added,
    /// Only present in the original text
    Removed,
}

impl ChangeKind {
    /// Whether lines of this kind belong to the original text
    pub fn in_original(self) -> bool {
        matches!(self, ChangeKind::Equal | ChangeKind::Removed)
    }

    /// Whether lines of this kind belong to the modified text
    pub fn in_modified(self) -> bool {
        matches!(self, ChangeKind::Equal | ChangeKind::Added)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Equal => "equal",
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of consecutive lines sharing the same classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSegment {
    pub kind: ChangeKind,
    /// Line contents without their terminators
    pub lines: Vec<String>,
    /// Number of lines in the segment
    pub count: usize,
}

impl ChangeSegment {
    /// Build a segment whose count matches its lines
    pub fn new(kind: ChangeKind, lines: Vec<String>) -> Self {
        let count = lines.len();
        Self { kind, lines, count }
    }

    pub fn equal<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(ChangeKind::Equal, lines.into_iter().map(Into::into).collect())
    }

    pub fn added<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(ChangeKind::Added, lines.into_iter().map(Into::into).collect())
    }

    pub fn removed<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(ChangeKind::Removed, lines.into_iter().map(Into::into).collect())
    }
}

/// Consistency violations in a segment sequence handed to a presenter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("segment {index} declares {count} lines but holds {actual}")]
    CountMismatch {
        index: usize,
        count: usize,
        actual: usize,
    },

    #[error("segment {index} is empty")]
    EmptySegment { index: usize },

    #[error("segment {index} repeats the {kind} kind of the segment before it")]
    AdjacentSameKind { index: usize, kind: ChangeKind },

    #[error("line {line} of the {side} text is highlighted twice")]
    HighlightCollision { side: &'static str, line: usize },
}

/// Check that a segment sequence satisfies the diff output contract
pub fn validate_segments(segments: &[ChangeSegment]) -> Result<(), SegmentError> {
    let mut previous: Option<ChangeKind> = None;

    for (index, segment) in segments.iter().enumerate() {
        if segment.count != segment.lines.len() {
            return Err(SegmentError::CountMismatch {
                index,
                count: segment.count,
                actual: segment.lines.len(),
            });
        }
        if segment.count == 0 {
            return Err(SegmentError::EmptySegment { index });
        }
        if previous == Some(segment.kind) {
            return Err(SegmentError::AdjacentSameKind {
                index,
                kind: segment.kind,
            });
        }
        previous = Some(segment.kind);
    }

    Ok(())
}

/// Lines of the original text, reconstructed from a segment sequence
pub fn original_lines(segments: &[ChangeSegment]) -> Vec<&str> {
    side_lines(segments, ChangeKind::in_original)
}

/// Lines of the modified text, reconstructed from a segment sequence
pub fn modified_lines(segments: &[ChangeSegment]) -> Vec<&str> {
    side_lines(segments, ChangeKind::in_modified)
}

fn side_lines(segments: &[ChangeSegment], keep: fn(ChangeKind) -> bool) -> Vec<&str> {
    segments
        .iter()
        .filter(|s| keep(s.kind))
        .flat_map(|s| s.lines.iter().map(String::as_str))
        .collect()
}

/// Line totals for a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn from_segments(segments: &[ChangeSegment]) -> Self {
        let mut stats = Self::default();
        for segment in segments {
            match segment.kind {
                ChangeKind::Equal => stats.unchanged += segment.count,
                ChangeKind::Added => stats.added += segment.count,
                ChangeKind::Removed => stats.removed += segment.count,
            }
        }
        stats
    }

    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }

    /// Lines in the original text
    pub fn original_total(&self) -> usize {
        self.unchanged + self.removed
    }

    /// Lines in the modified text
    pub fn modified_total(&self) -> usize {
        self.unchanged + self.added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed() {
        let segments = vec![
            ChangeSegment::equal(["a"]),
            ChangeSegment::removed(["b"]),
            ChangeSegment::added(["c", "d"]),
        ];
        assert_eq!(validate_segments(&segments), Ok(()));
        assert_eq!(validate_segments(&[]), Ok(()));
    }

    #[test]
    fn test_validate_count_mismatch() {
        let mut segment = ChangeSegment::added(["x"]);
        segment.count = 3;

        let err = validate_segments(&[ChangeSegment::equal(["a"]), segment]).unwrap_err();
        assert_eq!(
            err,
            SegmentError::CountMismatch {
                index: 1,
                count: 3,
                actual: 1
            }
        );
        assert_eq!(err.to_string(), "segment 1 declares 3 lines but holds 1");
    }

    #[test]
    fn test_validate_empty_segment() {
        let segments = vec![ChangeSegment::equal(Vec::<String>::new())];
        assert_eq!(
            validate_segments(&segments),
            Err(SegmentError::EmptySegment { index: 0 })
        );
    }

    #[test]
    fn test_validate_adjacent_same_kind() {
        let segments = vec![
            ChangeSegment::removed(["a"]),
            ChangeSegment::removed(["b"]),
        ];
        let err = validate_segments(&segments).unwrap_err();
        assert_eq!(
            err,
            SegmentError::AdjacentSameKind {
                index: 1,
                kind: ChangeKind::Removed
            }
        );
        assert_eq!(
            err.to_string(),
            "segment 1 repeats the removed kind of the segment before it"
        );
    }

    #[test]
    fn test_side_reconstruction() {
        let segments = vec![
            ChangeSegment::equal(["a"]),
            ChangeSegment::removed(["b"]),
            ChangeSegment::added(["B"]),
            ChangeSegment::equal(["c"]),
        ];
        assert_eq!(original_lines(&segments), vec!["a", "b", "c"]);
        assert_eq!(modified_lines(&segments), vec!["a", "B", "c"]);
    }

    #[test]
    fn test_stats() {
        let segments = vec![
            ChangeSegment::equal(["a", "b"]),
            ChangeSegment::removed(["c"]),
            ChangeSegment::added(["d", "e", "f"]),
        ];
        let stats = DiffStats::from_segments(&segments);
        assert_eq!(
            stats,
            DiffStats {
                added: 3,
                removed: 1,
                unchanged: 2
            }
        );
        assert!(stats.has_changes());
        assert_eq!(stats.original_total(), 3);
        assert_eq!(stats.modified_total(), 5);
        assert!(!DiffStats::from_segments(&segments[..1]).has_changes());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ChangeSegment::added(["x"])).unwrap();
        assert_eq!(json, r#"{"kind":"added","lines":["x"],"count":1}"#);
    }
}
