//! Oriented cliques and deep criticality.
//!
//! Purpose
//! - `is_oriented` decides whether two vertices of an oriented graph are joined by
//!   an arc or a directed 2-path in either direction. Vertices related this way
//!   can never share a color in an oriented coloring.
//! - `is_oriented_clique` asks this of every pair.
//! - `is_deeply_critical` checks that deleting any single arc from an oriented
//!   clique leaves two distinct witnesses at the arc's endpoints.
//!
//! Indices
//! - All predicates take vertex indices `0..n` of one `OrientedGraph`. The graph
//!   carries its own vertex ordering, so there is no separate `nodes` list to keep
//!   in sync across calls.
//!
//! Layout
//! - `oracle.rs` (pair relation and clique test), `critical.rs` (deletion check).

mod critical;
mod oracle;

pub use critical::{critical_pair_exists, first_noncritical_arc, is_deeply_critical};
pub use oracle::{first_unoriented_pair, is_oriented, is_oriented_clique};
