//! Exhaustive search for deeply critical oriented cliques (DCOCs).
//!
//! For each small undirected input graph, every orientation of its edges is
//! tested for being an oriented clique (all vertex pairs joined by an arc or a
//! directed 2-path) and for deep criticality (deleting any arc leaves two distinct
//! witnesses at its endpoints). Survivors are reported up to isomorphism.
//!
//! Layout
//! - `graph`: undirected inputs, oriented graphs, diameter.
//! - `graph6`: input decoding and streaming.
//! - `orient`: the 2^m orientation enumeration.
//! - `clique`: pair relation, clique and criticality predicates.
//! - `collect`: isomorphism-deduplicated result set.
//! - `search`: the per-graph pipeline with its config and counters.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   `api` re-exports in callers.

pub mod api;
pub mod clique;
pub mod collect;
pub mod graph;
pub mod graph6;
pub mod orient;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{GraphError, OrientedGraph, UndirectedGraph};
pub use graph6::{decode_graph6, read_graph6, Graph6Error, Graph6Reader, Graph6Record, InputError};
pub use search::{analyze, GraphReport, SearchCfg, SearchError, SearchStats};
