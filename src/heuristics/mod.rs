//! Matching heuristics.
//!
//! Every heuristic has the shape `(graph, matching, limit[, rng])` and
//! writes a fresh matching of at most `limit` pairs into `matching`,
//! starting from the identity:
//!
//! - **mxm** [`maximal`]: first free neighbor, sweeping vertices in id order.
//! - **rrm** [`random_random`]: random vertex, random free neighbor.
//! - **rhm** [`random_heavy`]: random vertex, heaviest free neighbor.
//! - **grm** [`greedy_heavy`]: edges in descending weight order.
//! - **lhm** [`locally_heaviest`]: locally heaviest edges via cursor-based
//!   exploration.
//! - **pgm** [`path_growing`]: two alternating matchings grown along
//!   heavy paths; the heavier one wins.
//!
//! The weighted heuristics fall back to an unweighted one when the graph
//! has no edge weights and report [`Status::Warning`] if the graph has
//! any edges.
//!
//! # References
//!
//! - Drake & Hougardy (2003), "A simple approximation algorithm for the
//!   weighted matching problem" (path growing)
//! - Preis (1999), "Linear time 1/2-approximation algorithm for maximum
//!   weighted matching in general graphs" (locally heaviest)

mod greedy;
mod locally_heaviest;
mod maximal;
mod path_growing;
mod random;

pub use greedy::greedy_heavy;
pub use locally_heaviest::locally_heaviest;
pub use maximal::maximal;
pub use path_growing::path_growing;
pub use random::{random_heavy, random_random};

use crate::graph::Graph;
use crate::matching::{MatchError, Matching, Status};

/// Checks that the matching covers the graph and resets it to the identity.
pub(crate) fn prepare(graph: &Graph, matching: &mut Matching) -> Result<(), MatchError> {
    if matching.len() != graph.vertex_count() {
        return Err(MatchError::Fatal(format!(
            "matching covers {} vertices, graph has {}",
            matching.len(),
            graph.vertex_count()
        )));
    }
    matching.reset();
    Ok(())
}

/// Status reported when a weighted heuristic ran its unweighted fallback.
pub(crate) fn fallback(graph: &Graph, heuristic: &str, status: Status) -> Status {
    if graph.edge_entry_count() == 0 {
        return status;
    }
    log::warn!("{heuristic}: graph has no edge weights, used unweighted fallback");
    status.combine(Status::Warning)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::graph::Graph;

    /// Path 0-1-2-3 with the given three weights.
    pub fn path4(w01: f64, w12: f64, w23: f64) -> Graph {
        Graph::from_edges(4, &[(0, 1, w01), (1, 2, w12), (2, 3, w23)]).unwrap()
    }

    pub fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]).unwrap()
    }

    pub fn star() -> Graph {
        Graph::from_edges(4, &[(0, 1, 3.0), (0, 2, 1.0), (0, 3, 2.0)]).unwrap()
    }

    pub fn empty() -> Graph {
        Graph::new(vec![0], vec![]).unwrap()
    }

    /// 6x6 grid with varied weights.
    pub fn grid() -> Graph {
        let side = 6;
        let mut edges = Vec::new();
        let mut w = 1.0;
        for r in 0..side {
            for c in 0..side {
                let v = r * side + c;
                if c + 1 < side {
                    edges.push((v, v + 1, w));
                    w += 1.0;
                }
                if r + 1 < side {
                    edges.push((v, v + side, (w * 7.0) % 23.0 + 0.5));
                    w += 1.0;
                }
            }
        }
        Graph::from_edges(side * side, &edges).unwrap()
    }
}
