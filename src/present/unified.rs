use serde::{Deserialize, Serialize};

use super::inline::{prefix_for, LineAnnotation};
use crate::core::segment::{validate_segments, ChangeKind, ChangeSegment, SegmentError};

/// A line with its position on each side of the comparison (1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedLine {
    pub kind: ChangeKind,
    pub text: String,
    /// Line number in the original text, if the line exists there
    pub old_line: Option<usize>,
    /// Line number in the modified text, if the line exists there
    pub new_line: Option<usize>,
}

impl NumberedLine {
    pub fn annotation(&self) -> LineAnnotation {
        LineAnnotation::new(self.kind, self.text.as_str())
    }
}

/// A contiguous group of changes with surrounding context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedHunk {
    /// First original line covered (or the line before, when `old_len` is 0)
    pub old_start: usize,
    pub old_len: usize,
    /// First modified line covered (or the line before, when `new_len` is 0)
    pub new_start: usize,
    pub new_len: usize,
    pub lines: Vec<NumberedLine>,
}

impl UnifiedHunk {
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_len, self.new_start, self.new_len
        )
    }
}

/// Attach original/modified line numbers to every line of a segment sequence
pub fn number_lines(segments: &[ChangeSegment]) -> Result<Vec<NumberedLine>, SegmentError> {
    validate_segments(segments)?;

    let mut rows = Vec::new();
    let mut old_line = 1usize;
    let mut new_line = 1usize;

    for segment in segments {
        for text in &segment.lines {
            let old = segment.kind.in_original().then_some(old_line);
            let new = segment.kind.in_modified().then_some(new_line);
            if old.is_some() {
                old_line += 1;
            }
            if new.is_some() {
                new_line += 1;
            }
            rows.push(NumberedLine {
                kind: segment.kind,
                text: text.clone(),
                old_line: old,
                new_line: new,
            });
        }
    }

    Ok(rows)
}

/// Group changed lines into hunks with up to `context_lines` unchanged lines
/// on each side. Hunks whose context windows touch are merged.
pub fn to_unified_hunks(
    segments: &[ChangeSegment],
    context_lines: usize,
) -> Result<Vec<UnifiedHunk>, SegmentError> {
    let rows = number_lines(segments)?;

    let mut visible = vec![false; rows.len()];
    for (index, row) in rows.iter().enumerate() {
        if row.kind == ChangeKind::Equal {
            continue;
        }
        let start = index.saturating_sub(context_lines);
        let end = index
            .saturating_add(context_lines)
            .saturating_add(1)
            .min(rows.len());
        visible[start..end].iter_mut().for_each(|v| *v = true);
    }

    let mut hunks = Vec::new();
    let mut old_seen = 0usize;
    let mut new_seen = 0usize;
    let mut index = 0usize;

    while index < rows.len() {
        if !visible[index] {
            old_seen += usize::from(rows[index].kind.in_original());
            new_seen += usize::from(rows[index].kind.in_modified());
            index += 1;
            continue;
        }

        let start = index;
        let (old_before, new_before) = (old_seen, new_seen);
        while index < rows.len() && visible[index] {
            old_seen += usize::from(rows[index].kind.in_original());
            new_seen += usize::from(rows[index].kind.in_modified());
            index += 1;
        }

        let old_len = old_seen - old_before;
        let new_len = new_seen - new_before;
        hunks.push(UnifiedHunk {
            old_start: if old_len == 0 { old_before } else { old_before + 1 },
            old_len,
            new_start: if new_len == 0 { new_before } else { new_before + 1 },
            new_len,
            lines: rows[start..index].to_vec(),
        });
    }

    Ok(hunks)
}

/// Render hunks as unified diff text; an empty hunk list renders nothing
pub fn render_unified(hunks: &[UnifiedHunk], old_label: &str, new_label: &str) -> String {
    if hunks.is_empty() {
        return String::new();
    }

    let mut output = format!("--- {}\n+++ {}\n", old_label, new_label);
    for hunk in hunks {
        output.push_str(&hunk.header());
        output.push('\n');
        for line in &hunk.lines {
            output.push(prefix_for(line.kind));
            output.push_str(&line.text);
            output.push('\n');
        }
    }
    output
}
