//! Splitting text blobs into diffable lines

/// Split text into lines on `\n`.
///
/// A single trailing empty element produced by a final terminator is dropped,
/// so `"a\n"` and `"a"` both yield `["a"]`, while `"a\n\n"` yields `["a", ""]`.
/// Carriage returns are kept as line content.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').collect()
}

/// Join lines back into a newline-terminated blob (inverse of [`split_lines`]
/// for text that ends with a terminator)
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}
