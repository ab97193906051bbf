//! Exhaustive orientation of an undirected graph.
//!
//! Orientation word `w` in `0..2^m` directs edge `i = (u, v)` (in the graph's edge
//! order) as `u → v` when bit `m-1-i` of `w` is 0 and `v → u` otherwise. The first
//! edge is the most significant digit, so the words enumerate binary strings in
//! lexicographic order and the output is reproducible across runs.

use crate::graph::{GraphError, OrientedGraph, UndirectedGraph, MAX_ORIENTED_EDGES};

/// Lazy iterator over all `2^m` orientations of a graph.
#[derive(Clone, Debug)]
pub struct Orientations<'a> {
    graph: &'a UndirectedGraph,
    next: u64,
    end: u64,
}

/// Starts a fresh enumeration of every orientation of `g`.
///
/// Fails only when `2^m` does not fit the word counter (`m > 63`).
pub fn orientations(g: &UndirectedGraph) -> Result<Orientations<'_>, GraphError> {
    let m = g.edge_count();
    if m > MAX_ORIENTED_EDGES {
        return Err(GraphError::TooManyEdges { edges: m });
    }
    Ok(Orientations {
        graph: g,
        next: 0,
        end: 1u64 << m,
    })
}

/// The orientation of `g` selected by `word` (see module docs).
pub fn orientation_of(g: &UndirectedGraph, word: u64) -> OrientedGraph {
    let edges = g.edges();
    let m = edges.len();
    debug_assert!(m <= MAX_ORIENTED_EDGES && (m == MAX_ORIENTED_EDGES || word >> m == 0));
    let mut d = OrientedGraph::with_capacity(g.vertex_count(), m);
    for (i, &(u, v)) in edges.iter().enumerate() {
        if (word >> (m - 1 - i)) & 1 == 0 {
            d.push_arc(u, v);
        } else {
            d.push_arc(v, u);
        }
    }
    d
}

impl Iterator for Orientations<'_> {
    type Item = OrientedGraph;

    fn next(&mut self) -> Option<OrientedGraph> {
        if self.next == self.end {
            return None;
        }
        let word = self.next;
        self.next += 1;
        Some(orientation_of(self.graph, word))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        match usize::try_from(left) {
            Ok(left) => (left, Some(left)),
            Err(_) => (usize::MAX, None),
        }
    }
}
