pub mod engine;
pub mod lines;
pub mod myers;
pub mod segment;

pub use engine::{compute_line_diff, compute_line_diff_with, DiffAlgorithm, DiffOptions};
pub use lines::{join_lines, split_lines};
pub use segment::{
    modified_lines, original_lines, validate_segments, ChangeKind, ChangeSegment, DiffStats,
    SegmentError,
};
