//! Arc-or-2-path relation between vertex pairs.

use crate::graph::{bit, OrientedGraph};

/// True iff `i` and `j` are joined by an arc, or by a directed path of length
/// exactly two through a third vertex, in either direction.
///
/// Symmetric in `(i, j)`. For `i == j` the answer is unspecified.
#[inline]
pub fn is_oriented(d: &OrientedGraph, i: usize, j: usize) -> bool {
    if d.has_arc(i, j) || d.has_arc(j, i) {
        return true;
    }
    let others = !(bit(i) | bit(j));
    // i → k → j, then j → k → i.
    d.out_row(i) & d.in_row(j) & others != 0 || d.out_row(j) & d.in_row(i) & others != 0
}

/// First pair `(i, j)`, `i < j`, in row-major order that is not oriented.
pub fn first_unoriented_pair(d: &OrientedGraph) -> Option<(usize, usize)> {
    let n = d.vertex_count();
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .find(|&(i, j)| !is_oriented(d, i, j))
}

/// True iff every pair of distinct vertices is oriented.
pub fn is_oriented_clique(d: &OrientedGraph) -> bool {
    first_unoriented_pair(d).is_none()
}
