//! Small undirected graphs and their orientations.
//!
//! Purpose
//! - `UndirectedGraph` is the immutable input: vertices `0..n` and a stable edge
//!   enumeration used by the orientation generator.
//! - `OrientedGraph` is one orientation: exactly one arc per source edge, stored as
//!   out/in bitset rows so arc and 2-path queries are a few word operations.
//!
//! Representation
//! - Row `v` is a `u64` bitset, so `n <= 64`. The search itself is only practical
//!   for much smaller graphs (2^m orientations).
//! - Vertex indices double as labels: the graph6 decoder produces `0..n`, and the
//!   same ordering is used by every predicate for one graph's analysis.

use std::fmt;

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};

/// Largest vertex count representable by the bitset rows.
pub const MAX_VERTICES: usize = 64;

/// Largest edge count the orientation counter can enumerate (2^m must fit a `u64`).
pub const MAX_ORIENTED_EDGES: usize = 63;

/// Errors raised when constructing graphs from explicit vertex/edge data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    TooManyVertices { n: usize },
    TooManyEdges { edges: usize },
    VertexOutOfRange { vertex: usize, n: usize },
    SelfLoop { vertex: usize },
    /// The pair already carries an arc (in either direction).
    RepeatedArc { from: usize, to: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyVertices { n } => {
                write!(f, "graph has {n} vertices (at most {MAX_VERTICES} supported)")
            }
            Self::TooManyEdges { edges } => write!(
                f,
                "graph has {edges} edges (at most {MAX_ORIENTED_EDGES} can be oriented exhaustively)"
            ),
            Self::VertexOutOfRange { vertex, n } => {
                write!(f, "vertex {vertex} out of range for a graph on {n} vertices")
            }
            Self::SelfLoop { vertex } => write!(f, "self-loop at vertex {vertex}"),
            Self::RepeatedArc { from, to } => {
                write!(f, "pair ({from}, {to}) already carries an arc")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[inline(always)]
pub(crate) const fn bit(v: usize) -> u64 {
    1u64 << v
}

fn check_order(n: usize) -> Result<(), GraphError> {
    if n > MAX_VERTICES {
        return Err(GraphError::TooManyVertices { n });
    }
    Ok(())
}

fn check_pair(n: usize, u: usize, v: usize) -> Result<(), GraphError> {
    for vertex in [u, v] {
        if vertex >= n {
            return Err(GraphError::VertexOutOfRange { vertex, n });
        }
    }
    if u == v {
        return Err(GraphError::SelfLoop { vertex: u });
    }
    Ok(())
}

/// Simple undirected graph on vertices `0..n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndirectedGraph {
    n: usize,
    adj: Vec<u64>,
    /// Edges `(u, v)` with `u < v`, lexicographic. This is the enumeration order
    /// used to map orientation words to arcs.
    edges: Vec<(usize, usize)>,
}

impl UndirectedGraph {
    /// Graph on `n` vertices without edges.
    pub fn empty(n: usize) -> Result<Self, GraphError> {
        check_order(n)?;
        Ok(Self {
            n,
            adj: vec![0; n],
            edges: Vec::new(),
        })
    }

    /// Builds a graph from an edge list. Repeated edges (in either order) collapse.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        check_order(n)?;
        let mut adj = vec![0u64; n];
        for &(u, v) in edges {
            check_pair(n, u, v)?;
            adj[u] |= bit(v);
            adj[v] |= bit(u);
        }
        Ok(Self::from_adj_rows(n, adj))
    }

    /// Builds a graph from symmetric, loop-free adjacency rows.
    pub(crate) fn from_adj_rows(n: usize, adj: Vec<u64>) -> Self {
        debug_assert!(n <= MAX_VERTICES);
        debug_assert_eq!(adj.len(), n);
        let mut edges = Vec::new();
        for u in 0..n {
            debug_assert_eq!((adj[u] >> u) & 1, 0, "self-loop at vertex {u}");
            for v in (u + 1)..n {
                debug_assert_eq!(
                    (adj[u] >> v) & 1,
                    (adj[v] >> u) & 1,
                    "adjacency is not symmetric at ({u},{v})"
                );
                if adj[u] & bit(v) != 0 {
                    edges.push((u, v));
                }
            }
        }
        Self { n, adj, edges }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in their stable enumeration order.
    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.n && v < self.n && self.adj[u] & bit(v) != 0
    }

    /// Neighbor bitset of `v`.
    #[inline]
    pub fn neighbors(&self, v: usize) -> u64 {
        self.adj[v]
    }

    /// See [`diameter`].
    pub fn diameter(&self) -> Option<usize> {
        diameter(self)
    }

    /// Petgraph view with node `i` standing for vertex `i`.
    pub fn to_ungraph(&self) -> UnGraph<(), ()> {
        let mut g = UnGraph::with_capacity(self.n, self.edges.len());
        let nodes: Vec<NodeIndex> = (0..self.n).map(|_| g.add_node(())).collect();
        for &(u, v) in &self.edges {
            g.add_edge(nodes[u], nodes[v], ());
        }
        g
    }
}

/// Longest shortest-path distance over all vertex pairs.
///
/// Returns `None` for the empty graph and for disconnected graphs (the distance is
/// infinite there). A single vertex has diameter `Some(0)`.
pub fn diameter(g: &UndirectedGraph) -> Option<usize> {
    if g.n == 0 {
        return None;
    }
    let ug = g.to_ungraph();
    let mut longest = 0;
    for source in ug.node_indices() {
        let dist = dijkstra(&ug, source, None, |_| 1usize);
        if dist.len() < g.n {
            return None;
        }
        longest = longest.max(dist.values().copied().max().unwrap_or(0));
    }
    Some(longest)
}

/// One orientation of an undirected graph.
///
/// Invariant: no loops, and at most one arc per vertex pair. Arcs keep the order
/// in which they were created (for orientations: the source edge order).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientedGraph {
    n: usize,
    out: Vec<u64>,
    inc: Vec<u64>,
    arcs: Vec<(usize, usize)>,
}

impl OrientedGraph {
    /// Builds an oriented graph from explicit arcs, rejecting loops and pairs that
    /// would carry two arcs.
    pub fn from_arcs(n: usize, arcs: &[(usize, usize)]) -> Result<Self, GraphError> {
        check_order(n)?;
        let mut d = Self::with_capacity(n, arcs.len());
        for &(from, to) in arcs {
            check_pair(n, from, to)?;
            if d.has_arc(from, to) || d.has_arc(to, from) {
                return Err(GraphError::RepeatedArc { from, to });
            }
            d.push_arc(from, to);
        }
        Ok(d)
    }

    pub(crate) fn with_capacity(n: usize, arcs: usize) -> Self {
        debug_assert!(n <= MAX_VERTICES);
        Self {
            n,
            out: vec![0; n],
            inc: vec![0; n],
            arcs: Vec::with_capacity(arcs),
        }
    }

    /// Appends `from → to`; callers guarantee the pair is still free.
    pub(crate) fn push_arc(&mut self, from: usize, to: usize) {
        debug_assert!(from != to && from < self.n && to < self.n);
        debug_assert!(!self.has_arc(from, to) && !self.has_arc(to, from));
        self.out[from] |= bit(to);
        self.inc[to] |= bit(from);
        self.arcs.push((from, to));
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Arcs in creation order.
    #[inline]
    pub fn arcs(&self) -> &[(usize, usize)] {
        &self.arcs
    }

    #[inline]
    pub fn has_arc(&self, from: usize, to: usize) -> bool {
        from < self.n && to < self.n && self.out[from] & bit(to) != 0
    }

    /// Out-neighbor bitset of `v`.
    #[inline]
    pub fn out_row(&self, v: usize) -> u64 {
        self.out[v]
    }

    /// In-neighbor bitset of `v`.
    #[inline]
    pub fn in_row(&self, v: usize) -> u64 {
        self.inc[v]
    }

    /// Copy of `self` without the arc `from → to`. `self` is left untouched; a
    /// missing arc yields an unchanged copy.
    pub fn without_arc(&self, from: usize, to: usize) -> Self {
        let mut d = self.clone();
        if d.has_arc(from, to) {
            d.out[from] &= !bit(to);
            d.inc[to] &= !bit(from);
            d.arcs.retain(|&a| a != (from, to));
        }
        d
    }

    /// Petgraph view with node `i` standing for vertex `i`.
    pub fn to_digraph(&self) -> DiGraph<(), ()> {
        let mut g = DiGraph::with_capacity(self.n, self.arcs.len());
        let nodes: Vec<NodeIndex> = (0..self.n).map(|_| g.add_node(())).collect();
        for &(u, v) in &self.arcs {
            g.add_edge(nodes[u], nodes[v], ());
        }
        g
    }
}

/// Arc list as `[(u, v), (x, y)]`.
impl fmt::Display for OrientedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, (u, v)) in self.arcs.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({u}, {v})")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> UndirectedGraph {
        let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
        UndirectedGraph::from_edges(n, &edges).unwrap()
    }

    fn cycle(n: usize) -> UndirectedGraph {
        let edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
        UndirectedGraph::from_edges(n, &edges).unwrap()
    }

    #[test]
    fn edges_are_enumerated_lexicographically() {
        let g = UndirectedGraph::from_edges(4, &[(3, 2), (1, 0), (2, 0), (0, 1)]).unwrap();
        assert_eq!(g.edges(), &[(0, 1), (0, 2), (2, 3)]);
        assert!(g.has_edge(3, 2) && g.has_edge(2, 3));
        assert!(!g.has_edge(1, 3));
        assert_eq!(g.neighbors(0), 0b0110);
    }

    #[test]
    fn from_edges_rejects_bad_input() {
        assert_eq!(
            UndirectedGraph::from_edges(3, &[(0, 3)]),
            Err(GraphError::VertexOutOfRange { vertex: 3, n: 3 })
        );
        assert_eq!(
            UndirectedGraph::from_edges(3, &[(1, 1)]),
            Err(GraphError::SelfLoop { vertex: 1 })
        );
        assert_eq!(
            UndirectedGraph::empty(65),
            Err(GraphError::TooManyVertices { n: 65 })
        );
    }

    #[test]
    fn diameter_of_paths_and_cycles() {
        assert_eq!(path(5).diameter(), Some(4));
        assert_eq!(path(2).diameter(), Some(1));
        assert_eq!(cycle(5).diameter(), Some(2));
        assert_eq!(cycle(6).diameter(), Some(3));
        assert_eq!(UndirectedGraph::empty(1).unwrap().diameter(), Some(0));
    }

    #[test]
    fn diameter_undefined_for_empty_or_disconnected() {
        assert_eq!(UndirectedGraph::empty(0).unwrap().diameter(), None);
        assert_eq!(UndirectedGraph::empty(2).unwrap().diameter(), None);
        let two_components = UndirectedGraph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(two_components.diameter(), None);
    }

    #[test]
    fn oriented_rows_track_arcs() {
        let d = OrientedGraph::from_arcs(3, &[(0, 1), (2, 1)]).unwrap();
        assert!(d.has_arc(0, 1) && !d.has_arc(1, 0));
        assert_eq!(d.out_row(0), 0b010);
        assert_eq!(d.in_row(1), 0b101);
        assert_eq!(d.arc_count(), 2);
    }

    #[test]
    fn from_arcs_rejects_digons_and_duplicates() {
        assert_eq!(
            OrientedGraph::from_arcs(2, &[(0, 1), (1, 0)]),
            Err(GraphError::RepeatedArc { from: 1, to: 0 })
        );
        assert_eq!(
            OrientedGraph::from_arcs(2, &[(0, 1), (0, 1)]),
            Err(GraphError::RepeatedArc { from: 0, to: 1 })
        );
    }

    #[test]
    fn without_arc_leaves_original_untouched() {
        let d = OrientedGraph::from_arcs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let reduced = d.without_arc(1, 2);
        assert_eq!(reduced.arcs(), &[(0, 1), (2, 0)]);
        assert!(!reduced.has_arc(1, 2));
        assert_eq!(reduced.in_row(2), 0);
        assert!(d.has_arc(1, 2));
        assert_eq!(d.arc_count(), 3);
        // Removing the reverse direction is a no-op.
        assert_eq!(d.without_arc(2, 1), d);
    }

    #[test]
    fn display_lists_arcs_in_creation_order() {
        let d = OrientedGraph::from_arcs(5, &[(0, 1), (4, 0), (1, 2)]).unwrap();
        assert_eq!(d.to_string(), "[(0, 1), (4, 0), (1, 2)]");
        assert_eq!(OrientedGraph::from_arcs(1, &[]).unwrap().to_string(), "[]");
    }

    #[test]
    fn petgraph_views_match_counts() {
        let g = cycle(5);
        let ug = g.to_ungraph();
        assert_eq!((ug.node_count(), ug.edge_count()), (5, 5));
        let d = OrientedGraph::from_arcs(4, &[(0, 1), (1, 2)]).unwrap();
        let dg = d.to_digraph();
        assert_eq!((dg.node_count(), dg.edge_count()), (4, 2));
    }
}
