//! Read-only graph view consumed by every matching heuristic.
//!
//! The graph is stored in compressed sparse row (CSR) form: a per-vertex
//! offset table delimits each vertex's slice of one flat neighbor array.
//! Undirected edges appear once from each side, and a weighted graph
//! carries one weight per neighbor entry, mirrored on both sides.
//!
//! Construction (levels, vertex and edge weights) happens outside this
//! crate; [`Graph::new`] only checks that the arrays are well formed.

mod types;

pub use types::{Graph, GraphError};
