//! Myers' O(ND) shortest edit script over line slices
//!
//! Reference: E. W. Myers, "An O(ND) Difference Algorithm and Its Variations",
//! section 4b. The search runs forward and backward at once until the two
//! frontiers overlap, then recurses on both halves around that middle snake,
//! so memory stays linear in the input length. Shared leading and trailing
//! lines are matched before every split, and on the forward frontier a
//! deletion wins over an insertion that reaches the same diagonal, which
//! keeps earlier common lines aligned. Within each run of changes the script
//! lists deletions before insertions.

use std::ops::{Index, IndexMut, Range};

/// One step of an edit script, carrying indices into the compared slices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `old[x] == new[y]`
    Keep(usize, usize),
    /// `old[x]` is dropped
    Delete(usize),
    /// `new[y]` is introduced
    Insert(usize),
}

/// Compute a shortest edit script turning `old` into `new`
pub fn shortest_edit_script<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Edit> {
    let max_d = max_depth(old.len(), new.len());
    let mut forward = Frontier::new(max_d);
    let mut backward = Frontier::new(max_d);

    let mut edits = Vec::with_capacity(old.len().max(new.len()));
    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut forward,
        &mut backward,
        &mut edits,
    );

    deletions_first(edits)
}

/// Upper bound on the depth either half-search needs
fn max_depth(n: usize, m: usize) -> usize {
    (n + m + 1) / 2 + 1
}

/// Furthest-reaching x per diagonal `k`, stored at `k + offset`
struct Frontier {
    offset: isize,
    v: Vec<usize>,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 2],
        }
    }

    /// Whether the path onto diagonal `k` at depth `d` comes down from `k + 1`
    fn moves_down(&self, d: isize, k: isize) -> bool {
        k == -d || (k != d && self[k - 1] < self[k + 1])
    }
}

impl Index<isize> for Frontier {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}

fn common_prefix<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter().zip(new).take_while(|(a, b)| a == b).count()
}

fn common_suffix<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Emit the script for `old[old_range]` against `new[new_range]`
fn conquer<T: PartialEq>(
    old: &[T],
    mut old_range: Range<usize>,
    new: &[T],
    mut new_range: Range<usize>,
    forward: &mut Frontier,
    backward: &mut Frontier,
    edits: &mut Vec<Edit>,
) {
    let prefix = common_prefix(&old[old_range.clone()], &new[new_range.clone()]);
    edits.extend((0..prefix).map(|i| Edit::Keep(old_range.start + i, new_range.start + i)));
    old_range.start += prefix;
    new_range.start += prefix;

    let suffix = common_suffix(&old[old_range.clone()], &new[new_range.clone()]);
    old_range.end -= suffix;
    new_range.end -= suffix;

    if old_range.is_empty() {
        edits.extend(new_range.clone().map(Edit::Insert));
    } else if new_range.is_empty() {
        edits.extend(old_range.clone().map(Edit::Delete));
    } else if let Some((x, y)) =
        middle_snake(old, old_range.clone(), new, new_range.clone(), forward, backward)
            .filter(|&split| {
                // A corner split would not shrink the problem
                split != (old_range.start, new_range.start)
                    && split != (old_range.end, new_range.end)
            })
    {
        conquer(old, old_range.start..x, new, new_range.start..y, forward, backward, edits);
        conquer(old, x..old_range.end, new, y..new_range.end, forward, backward, edits);
    } else {
        edits.extend(old_range.clone().map(Edit::Delete));
        edits.extend(new_range.clone().map(Edit::Insert));
    }

    edits.extend((0..suffix).map(|i| Edit::Keep(old_range.end + i, new_range.end + i)));
}

/// Find a point on some shortest path that splits the problem in two
///
/// Both ranges are non-empty and share no leading or trailing line. The
/// returned point always lies inside the two ranges.
fn middle_snake<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    forward: &mut Frontier,
    backward: &mut Frontier,
) -> Option<(usize, usize)> {
    let n = old_range.len();
    let m = new_range.len();
    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;

    forward[1] = 0;
    backward[1] = 0;

    for d in 0..max_depth(n, m) as isize {
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if forward.moves_down(d, k) {
                forward[k + 1]
            } else {
                forward[k - 1] + 1
            };
            let y = (x as isize - k) as usize;
            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix(
                    &old[old_range.start + x..old_range.end],
                    &new[new_range.start + y..new_range.end],
                );
            }
            forward[k] = x;

            if odd && (k - delta).abs() < d && forward[k] + backward[delta - k] >= n {
                return Some((old_range.start + x0.min(n), new_range.start + y0.min(m)));
            }
        }

        for k in (-d..=d).rev().step_by(2) {
            let mut x = if backward.moves_down(d, k) {
                backward[k + 1]
            } else {
                backward[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            if x < n && y < m {
                let run = common_suffix(
                    &old[old_range.start..old_range.start + n - x],
                    &new[new_range.start..new_range.start + m - y],
                );
                x += run;
                y += run;
            }
            backward[k] = x;

            if !odd && (k - delta).abs() <= d && backward[k] + forward[delta - k] >= n {
                return Some((
                    old_range.start + n.saturating_sub(x),
                    new_range.start + m.saturating_sub(y),
                ));
            }
        }
    }

    None
}

/// Reorder each run of changes so its deletions precede its insertions
fn deletions_first(edits: Vec<Edit>) -> Vec<Edit> {
    let mut ordered = Vec::with_capacity(edits.len());
    let mut inserts = Vec::new();

    for edit in edits {
        match edit {
            Edit::Keep(..) => {
                ordered.append(&mut inserts);
                ordered.push(edit);
            }
            Edit::Delete(_) => ordered.push(edit),
            Edit::Insert(_) => inserts.push(edit),
        }
    }

    ordered.append(&mut inserts);
    ordered
}

/// Number of non-keep steps in an edit script
pub fn edit_distance(edits: &[Edit]) -> usize {
    edits
        .iter()
        .filter(|e| !matches!(e, Edit::Keep(..)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply<'a>(old: &[&'a str], new: &[&'a str], edits: &[Edit]) -> (Vec<&'a str>, Vec<&'a str>) {
        let mut rebuilt_old = Vec::new();
        let mut rebuilt_new = Vec::new();
        for edit in edits {
            match *edit {
                Edit::Keep(x, y) => {
                    assert_eq!(old[x], new[y]);
                    rebuilt_old.push(old[x]);
                    rebuilt_new.push(new[y]);
                }
                Edit::Delete(x) => rebuilt_old.push(old[x]),
                Edit::Insert(y) => rebuilt_new.push(new[y]),
            }
        }
        (rebuilt_old, rebuilt_new)
    }

    #[test]
    fn test_identical() {
        let a = ["x", "y", "z"];
        let edits = shortest_edit_script(&a, &a);
        assert_eq!(edits, vec![Edit::Keep(0, 0), Edit::Keep(1, 1), Edit::Keep(2, 2)]);
    }

    #[test]
    fn test_empty_sides() {
        let empty: [&str; 0] = [];
        assert!(shortest_edit_script(&empty, &empty).is_empty());
        assert_eq!(
            shortest_edit_script(&empty, &["a", "b"]),
            vec![Edit::Insert(0), Edit::Insert(1)]
        );
        assert_eq!(shortest_edit_script(&["a"], &empty), vec![Edit::Delete(0)]);
    }

    #[test]
    fn test_classic_example_distance() {
        // ABCABBA -> CBABAC has edit distance 5
        let old: Vec<&str> = "A B C A B B A".split(' ').collect();
        let new: Vec<&str> = "C B A B A C".split(' ').collect();

        let edits = shortest_edit_script(&old, &new);
        assert_eq!(edit_distance(&edits), 5);

        let (rebuilt_old, rebuilt_new) = apply(&old, &new, &edits);
        assert_eq!(rebuilt_old, old);
        assert_eq!(rebuilt_new, new);
    }

    #[test]
    fn test_replacement_in_middle() {
        let old = ["a", "b", "c"];
        let new = ["a", "X", "c"];
        let edits = shortest_edit_script(&old, &new);
        assert_eq!(
            edits,
            vec![
                Edit::Keep(0, 0),
                Edit::Delete(1),
                Edit::Insert(1),
                Edit::Keep(2, 2)
            ]
        );
    }

    #[test]
    fn test_prefers_leftmost_match() {
        // The inserted "a" could align on either side; the first "a" stays put
        let old = ["a", "b"];
        let new = ["a", "a", "b"];
        let edits = shortest_edit_script(&old, &new);
        assert_eq!(edits, vec![Edit::Keep(0, 0), Edit::Insert(1), Edit::Keep(1, 2)]);
    }

    #[test]
    fn test_disjoint() {
        let old = ["a", "b"];
        let new = ["c", "d", "e"];
        let edits = shortest_edit_script(&old, &new);
        assert_eq!(edit_distance(&edits), 5);
        let (rebuilt_old, rebuilt_new) = apply(&old, &new, &edits);
        assert_eq!(rebuilt_old, old);
        assert_eq!(rebuilt_new, new);
    }
}
