//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for the CLI, benches, and experiments. Breaking changes are
//! allowed and expected.

// Graph types
pub use crate::graph::{
    diameter, GraphError, OrientedGraph, UndirectedGraph, MAX_ORIENTED_EDGES, MAX_VERTICES,
};
// Input
pub use crate::graph6::{
    decode_graph6, read_graph6, Graph6Error, Graph6Reader, Graph6Record, InputError,
};
// Pipeline stages
pub use crate::clique::{
    critical_pair_exists, first_noncritical_arc, first_unoriented_pair, is_deeply_critical,
    is_oriented, is_oriented_clique,
};
pub use crate::collect::ResultCollector;
pub use crate::orient::{orientation_of, orientations, Orientations};
pub use crate::search::{analyze, GraphReport, SearchCfg, SearchError, SearchStats};
