//! Shared formatting helpers

/// Number of decimal digits needed to print `n`
pub fn digit_width(n: usize) -> usize {
    let mut width = 1;
    let mut rest = n / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}

/// Format an optional line number right-aligned to `width`, blank when absent
pub fn gutter(line: Option<usize>, width: usize) -> String {
    match line {
        Some(n) => format!("{:>width$}", n, width = width),
        None => " ".repeat(width),
    }
}

/// Collapse sorted line numbers into ranges, e.g. `[1, 2, 3, 7]` -> `"1-3, 7"`
pub fn compress_ranges<I: IntoIterator<Item = usize>>(lines: I) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut run: Option<(usize, usize)> = None;

    for line in lines {
        run = match run {
            Some((start, end)) if line == end + 1 => Some((start, line)),
            Some(done) => {
                parts.push(format_run(done));
                Some((line, line))
            }
            None => Some((line, line)),
        };
    }
    if let Some(done) = run {
        parts.push(format_run(done));
    }

    parts.join(", ")
}

fn format_run((start, end): (usize, usize)) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_width() {
        assert_eq!(digit_width(0), 1);
        assert_eq!(digit_width(9), 1);
        assert_eq!(digit_width(10), 2);
        assert_eq!(digit_width(12345), 5);
    }

    #[test]
    fn test_gutter() {
        assert_eq!(gutter(Some(7), 3), "  7");
        assert_eq!(gutter(None, 3), "   ");
        assert_eq!(gutter(Some(1234), 2), "1234");
    }

    #[test]
    fn test_compress_ranges() {
        assert_eq!(compress_ranges([1, 2, 3, 7]), "1-3, 7");
        assert_eq!(compress_ranges([4]), "4");
        assert_eq!(compress_ranges([2, 4, 5]), "2, 4-5");
        assert_eq!(compress_ranges(Vec::<usize>::new()), "");
    }
}
