use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use tracing::debug;

use super::lines::split_lines;
use super::myers::{self, Edit};
use super::segment::{ChangeKind, ChangeSegment};

/// Line matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Native Myers shortest edit script
    #[default]
    Myers,
    /// Patience diff, anchored on lines unique to both sides
    Patience,
}

/// Options for [`compute_line_diff_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub algorithm: DiffAlgorithm,
}

/// Compute the line diff between two text blobs using Myers' algorithm
///
/// The result is an ordered sequence of maximal same-kind runs. Within each
/// block of changes between two unchanged runs, removed lines come before
/// added lines. Both inputs empty gives an empty sequence.
pub fn compute_line_diff(original: &str, modified: &str) -> Vec<ChangeSegment> {
    compute_line_diff_with(original, modified, &DiffOptions::default())
}

/// Compute the line diff with an explicit algorithm choice
pub fn compute_line_diff_with(
    original: &str,
    modified: &str,
    options: &DiffOptions,
) -> Vec<ChangeSegment> {
    let old_lines = split_lines(original);
    let new_lines = split_lines(modified);

    let edits = match options.algorithm {
        DiffAlgorithm::Myers => myers::shortest_edit_script(&old_lines, &new_lines),
        DiffAlgorithm::Patience => patience_edit_script(&old_lines, &new_lines),
    };

    debug!(
        algorithm = ?options.algorithm,
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        distance = myers::edit_distance(&edits),
        "computed line diff"
    );

    build_segments(&edits, &old_lines, &new_lines)
}

fn patience_edit_script(old: &[&str], new: &[&str]) -> Vec<Edit> {
    let mut edits = Vec::with_capacity(old.len().max(new.len()));

    for op in capture_diff_slices(Algorithm::Patience, old, new) {
        match op.tag() {
            DiffTag::Equal => {
                edits.extend(op.old_range().zip(op.new_range()).map(|(x, y)| Edit::Keep(x, y)));
            }
            DiffTag::Delete => edits.extend(op.old_range().map(Edit::Delete)),
            DiffTag::Insert => edits.extend(op.new_range().map(Edit::Insert)),
            DiffTag::Replace => {
                edits.extend(op.old_range().map(Edit::Delete));
                edits.extend(op.new_range().map(Edit::Insert));
            }
        }
    }

    edits
}

/// Fold an edit script into maximal segments
fn build_segments(edits: &[Edit], old: &[&str], new: &[&str]) -> Vec<ChangeSegment> {
    let mut builder = SegmentBuilder::default();

    for edit in edits {
        match *edit {
            Edit::Keep(x, _) => builder.keep(old[x]),
            Edit::Delete(x) => builder.removed.push(old[x].to_string()),
            Edit::Insert(y) => builder.added.push(new[y].to_string()),
        }
    }

    builder.finish()
}

#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<ChangeSegment>,
    removed: Vec<String>,
    added: Vec<String>,
}

impl SegmentBuilder {
    fn keep(&mut self, line: &str) {
        self.flush_changes();
        self.push_run(ChangeKind::Equal, vec![line.to_string()]);
    }

    fn flush_changes(&mut self) {
        let removed = std::mem::take(&mut self.removed);
        let added = std::mem::take(&mut self.added);
        self.push_run(ChangeKind::Removed, removed);
        self.push_run(ChangeKind::Added, added);
    }

    fn push_run(&mut self, kind: ChangeKind, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }

        if let Some(last) = self.segments.last_mut() {
            if last.kind == kind {
                last.lines.extend(lines);
                last.count = last.lines.len();
                return;
            }
        }

        self.segments.push(ChangeSegment::new(kind, lines));
    }

    fn finish(mut self) -> Vec<ChangeSegment> {
        self.flush_changes();
        self.segments
    }
}
