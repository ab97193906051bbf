//! Deep criticality: every arc deletion leaves witnesses on both sides.

use super::oracle::is_oriented;
use crate::graph::OrientedGraph;

/// Witness scan for the deleted arc `i → j`, evaluated on `reduced` (the graph
/// with that arc already removed).
///
/// Each third vertex `k` is tested first as an `x` witness (`k` not oriented to
/// `j`); only if that fails is it tested as a `y` witness (`i` not oriented to
/// `k`). A single `k` therefore never counts for both sides, so a `true` result
/// always comes from two distinct witnesses. Note the converse does not hold: if
/// every candidate is an `x` witness, `y` is never recorded.
pub fn critical_pair_exists(reduced: &OrientedGraph, i: usize, j: usize) -> bool {
    let mut xfound = false;
    let mut yfound = false;
    for k in 0..reduced.vertex_count() {
        if k == i || k == j {
            continue;
        }
        if !is_oriented(reduced, k, j) {
            xfound = true;
        } else if !is_oriented(reduced, i, k) {
            yfound = true;
        }
    }
    xfound && yfound
}

/// First arc `(i, j)`, scanning `i` then `j` in index order, whose deletion fails
/// the witness scan.
pub fn first_noncritical_arc(d: &OrientedGraph) -> Option<(usize, usize)> {
    let n = d.vertex_count();
    for i in 0..n {
        for j in 0..n {
            if i == j || !d.has_arc(i, j) {
                continue;
            }
            let reduced = d.without_arc(i, j);
            if !critical_pair_exists(&reduced, i, j) {
                return Some((i, j));
            }
        }
    }
    None
}

/// True iff `d` is deeply critical.
///
/// Pre: `d` is an oriented clique; this is not re-checked. A graph without arcs
/// passes vacuously.
pub fn is_deeply_critical(d: &OrientedGraph) -> bool {
    first_noncritical_arc(d).is_none()
}
