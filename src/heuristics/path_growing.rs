//! Path growing matching (pgm).

use crate::graph::Graph;
use crate::matching::{try_buffer, MatchError, Matching, Status};

use super::{fallback, maximal, prepare};

/// Grows heavy paths and splits their edges alternately between two
/// candidate matchings, keeping the heavier candidate.
///
/// From every vertex untouched by both candidates, the path repeatedly
/// steps to the heaviest neighbor that is free in both. Edge assignment
/// alternates globally between the candidates, so consecutive path edges
/// never land in the same one. Growth stops once the second candidate
/// holds `limit` pairs, which bounds the first candidate as well.
/// Falls back to [`maximal`] on unweighted graphs.
///
/// Reference: Drake & Hougardy (2003), 1/2-approximation in linear time.
pub fn path_growing(
    graph: &Graph,
    matching: &mut Matching,
    limit: usize,
) -> Result<Status, MatchError> {
    let Some(weights) = graph.edge_weights() else {
        let status = maximal(graph, matching, limit)?;
        return Ok(fallback(graph, "pgm", status));
    };
    prepare(graph, matching)?;

    let n = graph.vertex_count();
    let mut candidates = [
        try_buffer("first candidate", n, 0usize)?,
        try_buffer("second candidate", n, 0usize)?,
    ];
    for m in candidates.iter_mut() {
        for (v, p) in m.iter_mut().enumerate() {
            *p = v;
        }
    }
    let mut sizes = [0usize; 2];
    let mut totals = [0.0f64; 2];
    let mut turn = 0usize;

    let untouched = |c: &[Vec<usize>; 2], v: usize| c[0][v] == v && c[1][v] == v;

    for start in 0..n {
        if sizes[1] >= limit {
            break;
        }
        if !untouched(&candidates, start) {
            continue;
        }
        let mut vertex = start;
        while sizes[1] < limit {
            let mut best = 0.0f64;
            let mut next = None;
            for k in graph.entries(vertex) {
                let u = graph.neighbor_at(k);
                if u != vertex && untouched(&candidates, u) && weights[k] > best {
                    best = weights[k];
                    next = Some(u);
                }
            }
            let Some(u) = next else {
                break;
            };
            candidates[turn][vertex] = u;
            candidates[turn][u] = vertex;
            sizes[turn] += 1;
            totals[turn] += best;
            turn = 1 - turn;
            vertex = u;
        }
    }

    let winner = if totals[0] < totals[1] { 1 } else { 0 };
    log::debug!(
        "pgm: candidate weights {:.3} / {:.3}, keeping candidate {}",
        totals[0],
        totals[1],
        winner + 1
    );
    matching.assign(&candidates[winner], sizes[winner]);

    Ok(Status::Ok)
}
