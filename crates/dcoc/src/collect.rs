//! Per-graph result set, deduplicated up to isomorphism.

use petgraph::algo::is_isomorphic;
use petgraph::graph::DiGraph;

use crate::graph::OrientedGraph;

/// Accepted graph plus its petgraph view, built once for repeated isomorphism checks.
#[derive(Clone, Debug)]
struct Entry {
    graph: OrientedGraph,
    view: DiGraph<(), ()>,
}

/// Insertion-ordered list of pairwise non-isomorphic oriented graphs.
#[derive(Clone, Debug, Default)]
pub struct ResultCollector {
    accepted: Vec<Entry>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `d` unless it is isomorphic (arc directions preserved) to an
    /// accepted graph. Returns whether `d` was added.
    pub fn try_add(&mut self, d: OrientedGraph) -> bool {
        let view = d.to_digraph();
        let duplicate = self.accepted.iter().any(|e| {
            e.graph.vertex_count() == d.vertex_count()
                && e.graph.arc_count() == d.arc_count()
                && is_isomorphic(&e.view, &view)
        });
        if duplicate {
            return false;
        }
        self.accepted.push(Entry { graph: d, view });
        true
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Accepted graphs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OrientedGraph> {
        self.accepted.iter().map(|e| &e.graph)
    }

    /// Arc lists `(source, target)` of the accepted graphs, in insertion order.
    pub fn arc_lists(&self) -> Vec<Vec<(usize, usize)>> {
        self.iter().map(|d| d.arcs().to_vec()).collect()
    }

    pub fn into_graphs(self) -> Vec<OrientedGraph> {
        self.accepted.into_iter().map(|e| e.graph).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digraph(n: usize, arcs: &[(usize, usize)]) -> OrientedGraph {
        OrientedGraph::from_arcs(n, arcs).unwrap()
    }

    #[test]
    fn relabeled_copy_is_rejected() {
        let c5 = digraph(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        // Same cycle under the permutation 0→3, 1→0, 2→4, 3→1, 4→2.
        let relabeled = digraph(5, &[(3, 0), (0, 4), (4, 1), (1, 2), (2, 3)]);
        let mut rs = ResultCollector::new();
        assert!(rs.try_add(c5.clone()));
        assert!(!rs.try_add(relabeled));
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.iter().next(), Some(&c5));
    }

    #[test]
    fn direction_matters() {
        // Cyclic and transitive triangles share the underlying graph.
        let cyclic = digraph(3, &[(0, 1), (1, 2), (2, 0)]);
        let transitive = digraph(3, &[(0, 1), (1, 2), (0, 2)]);
        let mut rs = ResultCollector::new();
        assert!(rs.try_add(cyclic));
        assert!(rs.try_add(transitive));
        assert_eq!(
            rs.arc_lists(),
            vec![vec![(0, 1), (1, 2), (2, 0)], vec![(0, 1), (1, 2), (0, 2)]]
        );
    }

    #[test]
    fn isolated_vertices_count() {
        let mut rs = ResultCollector::new();
        assert!(rs.try_add(digraph(2, &[(0, 1)])));
        assert!(rs.try_add(digraph(3, &[(0, 1)])));
        assert!(!rs.try_add(digraph(3, &[(2, 0)])));
        assert_eq!(rs.into_graphs().len(), 2);
    }

    #[test]
    fn starts_empty() {
        let rs = ResultCollector::new();
        assert!(rs.is_empty());
        assert!(rs.arc_lists().is_empty());
    }
}
