use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::segment::{validate_segments, ChangeKind, ChangeSegment, SegmentError};

/// Background treatment for an annotated line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleClass {
    Added,
    Removed,
    None,
}

impl StyleClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleClass::Added => "added",
            StyleClass::Removed => "removed",
            StyleClass::None => "none",
        }
    }
}

impl From<ChangeKind> for StyleClass {
    fn from(kind: ChangeKind) -> Self {
        match kind {
            ChangeKind::Equal => StyleClass::None,
            ChangeKind::Added => StyleClass::Added,
            ChangeKind::Removed => StyleClass::Removed,
        }
    }
}

/// One physical line of a unified diff view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAnnotation {
    /// `'+'`, `'-'` or `' '`
    pub prefix: char,
    pub text: String,
    pub style_class: StyleClass,
}

impl LineAnnotation {
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Self {
        Self {
            prefix: prefix_for(kind),
            text: text.into(),
            style_class: kind.into(),
        }
    }

    /// The line as it appears in a plain-text diff
    pub fn render(&self) -> String {
        format!("{}{}", self.prefix, self.text)
    }
}

/// Diff marker for a kind of change
pub fn prefix_for(kind: ChangeKind) -> char {
    match kind {
        ChangeKind::Added => '+',
        ChangeKind::Removed => '-',
        ChangeKind::Equal => ' ',
    }
}

/// Flatten segments into per-line annotations, preserving order exactly
pub fn to_inline_annotations(
    segments: &[ChangeSegment],
) -> Result<Vec<LineAnnotation>, SegmentError> {
    validate_segments(segments)?;

    let total: usize = segments.iter().map(|s| s.count).sum();
    let mut annotations = Vec::with_capacity(total);

    for segment in segments {
        annotations.extend(
            segment
                .lines
                .iter()
                .map(|line| LineAnnotation::new(segment.kind, line.as_str())),
        );
    }

    debug!(
        segments = segments.len(),
        annotations = annotations.len(),
        "built inline annotations"
    );

    Ok(annotations)
}
