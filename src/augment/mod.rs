//! Post-matching local search.
//!
//! Augmentation passes take a complete matching and try to raise its
//! total weight with short alternating rotations, never exceeding the
//! pair limit. Unlike the heuristics they keep the existing pairs as a
//! starting point.

mod rotation;

pub use rotation::{augment_three, augment_two, GAIN_EPSILON};

use crate::graph::Graph;
use crate::matching::{MatchError, Matching};

pub(crate) fn check_len(graph: &Graph, matching: &Matching) -> Result<(), MatchError> {
    if matching.len() == graph.vertex_count() {
        Ok(())
    } else {
        Err(MatchError::Fatal(format!(
            "matching covers {} vertices, graph has {}",
            matching.len(),
            graph.vertex_count()
        )))
    }
}
