use tracing::trace;

use crate::coverage::Interval;

/// Unordered index pairs `(i, j)` with `i < j < n`.
fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Collapses intervals into a set of disjoint runs, none of which touch.
///
/// Empty intervals are dropped. The order of the result is unspecified.
pub fn merge(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut merged: Vec<Interval> = intervals.into_iter()
        .filter(|iv| !iv.is_empty())
        .collect();

    while merged.len() > 1 {
        let Some((i, j)) = pairs(merged.len())
            .find(|&(i, j)| merged[i].touches(&merged[j]))
        else {
            break;
        };
        // j > i, so removing j first leaves i where it was.
        let b = merged.remove(j);
        let a = merged.remove(i);
        let union = a.union(&b);
        trace!(?a, ?b, ?union, "merged intervals");
        merged.push(union);
    }
    merged
}
