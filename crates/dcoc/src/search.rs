//! Exhaustive search of one input graph for deeply critical oriented cliques.
//!
//! Pipeline per graph: diameter pre-filter → every orientation → oriented-clique
//! test → deep-criticality test → isomorphism dedup. Sequential and deterministic:
//! results come out in orientation order (see `orient`).

use std::fmt;

use crate::clique::{is_deeply_critical, is_oriented_clique};
use crate::collect::ResultCollector;
use crate::graph::{GraphError, OrientedGraph, UndirectedGraph, MAX_ORIENTED_EDGES};
use crate::orient::orientations;

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Skip graphs whose diameter exceeds `diameter_bound` (or is undefined).
    pub use_diameter_prune: bool,
    /// Arcs and 2-paths only certify distance ≤ 2, so no orientation of a graph
    /// with larger diameter is an oriented clique. Keep configurable only for
    /// controlled ablations.
    pub diameter_bound: usize,
    /// Refuse graphs with more edges than this (the search visits 2^m orientations).
    pub max_edges: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            use_diameter_prune: true,
            diameter_bound: 2,
            max_edges: MAX_ORIENTED_EDGES,
        }
    }
}

/// Errors surfaced by [`analyze`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The graph exceeds the configured edge budget.
    EdgeBudget { edges: usize, max_edges: usize },
    Graph(GraphError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeBudget { edges, max_edges } => write!(
                f,
                "graph has {edges} edges, above the configured limit of {max_edges}"
            ),
            Self::Graph(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            Self::EdgeBudget { .. } => None,
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// Counters along the pipeline (before deduplication).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub orientations: u64,
    pub oriented_cliques: u64,
    pub deeply_critical: u64,
}

/// Outcome for one input graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphReport {
    pub vertices: usize,
    pub edges: usize,
    /// `None` when the graph is empty or disconnected.
    pub diameter: Option<usize>,
    /// Set when the diameter pre-filter rejected the graph.
    pub skipped: bool,
    pub stats: SearchStats,
    /// Pairwise non-isomorphic DCOCs, first representative of each class.
    pub dcocs: Vec<OrientedGraph>,
}

/// Runs the full search on `g`.
pub fn analyze(g: &UndirectedGraph, cfg: SearchCfg) -> Result<GraphReport, SearchError> {
    let diameter = g.diameter();
    let mut report = GraphReport {
        vertices: g.vertex_count(),
        edges: g.edge_count(),
        diameter,
        skipped: false,
        stats: SearchStats::default(),
        dcocs: Vec::new(),
    };
    if cfg.use_diameter_prune && !diameter.is_some_and(|d| d <= cfg.diameter_bound) {
        report.skipped = true;
        return Ok(report);
    }
    if g.edge_count() > cfg.max_edges {
        return Err(SearchError::EdgeBudget {
            edges: g.edge_count(),
            max_edges: cfg.max_edges,
        });
    }

    let mut found = ResultCollector::new();
    for d in orientations(g)? {
        report.stats.orientations += 1;
        if !is_oriented_clique(&d) {
            continue;
        }
        report.stats.oriented_cliques += 1;
        if !is_deeply_critical(&d) {
            continue;
        }
        report.stats.deeply_critical += 1;
        found.try_add(d);
    }
    report.dcocs = found.into_graphs();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph6::decode_graph6;

    fn run(g6: &str) -> GraphReport {
        let g = decode_graph6(g6.as_bytes()).unwrap();
        analyze(&g, SearchCfg::default()).unwrap()
    }

    fn lines(report: &GraphReport) -> Vec<String> {
        report.dcocs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn triangle_has_no_dcoc() {
        let r = run("Bw");
        assert!(!r.skipped);
        assert_eq!(r.stats.orientations, 8);
        // All eight orientations of K3 are oriented cliques.
        assert_eq!(r.stats.oriented_cliques, 8);
        assert_eq!(r.stats.deeply_critical, 0);
        assert!(r.dcocs.is_empty());
    }

    #[test]
    fn five_cycle_has_one_dcoc_up_to_isomorphism() {
        let r = run("Dhc");
        assert_eq!(r.diameter, Some(2));
        assert_eq!(r.stats.orientations, 32);
        // Only the two directed cycles are cliques; they are isomorphic.
        assert_eq!(r.stats.oriented_cliques, 2);
        assert_eq!(r.stats.deeply_critical, 2);
        assert_eq!(lines(&r), vec!["[(0, 1), (4, 0), (1, 2), (2, 3), (3, 4)]"]);
    }

    #[test]
    fn small_dense_graphs_have_none() {
        for g6 in ["C~", "Cl", "A_"] {
            let r = run(g6);
            assert!(!r.skipped, "{g6}");
            assert!(r.dcocs.is_empty(), "{g6}");
        }
    }

    #[test]
    fn single_vertex_is_vacuously_critical() {
        let r = run("@");
        assert_eq!(r.stats.orientations, 1);
        assert_eq!(lines(&r), vec!["[]"]);
    }

    #[test]
    fn long_path_is_skipped_by_diameter() {
        let r = run("DhC");
        assert_eq!(r.diameter, Some(4));
        assert!(r.skipped);
        assert_eq!(r.stats, SearchStats::default());
        assert!(r.dcocs.is_empty());
    }

    #[test]
    fn long_path_has_no_clique_even_without_prune() {
        let g = decode_graph6(b"DhC").unwrap();
        let cfg = SearchCfg {
            use_diameter_prune: false,
            ..SearchCfg::default()
        };
        let r = analyze(&g, cfg).unwrap();
        assert!(!r.skipped);
        assert_eq!(r.stats.orientations, 16);
        assert_eq!(r.stats.oriented_cliques, 0);
        assert!(r.dcocs.is_empty());
    }

    #[test]
    fn disconnected_graphs_are_skipped() {
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
        let r = analyze(&g, SearchCfg::default()).unwrap();
        assert!(r.skipped);
        assert_eq!(r.diameter, None);
    }

    #[test]
    fn edge_budget_is_enforced() {
        let g = decode_graph6(b"C~").unwrap();
        let cfg = SearchCfg {
            max_edges: 5,
            ..SearchCfg::default()
        };
        assert_eq!(
            analyze(&g, cfg),
            Err(SearchError::EdgeBudget {
                edges: 6,
                max_edges: 5
            })
        );
    }

    #[test]
    fn repeated_runs_agree() {
        let g = decode_graph6(b"Dhc").unwrap();
        let a = analyze(&g, SearchCfg::default()).unwrap();
        let b = analyze(&g, SearchCfg::default()).unwrap();
        assert_eq!(a, b);
    }
}
