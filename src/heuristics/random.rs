//! Randomized matchings (rrm, rhm).
//!
//! Both draw vertices uniformly from a shrinking pool (swap-with-last
//! removal) and differ only in how a drawn vertex picks its partner.

use rand::Rng;

use crate::graph::Graph;
use crate::matching::{try_buffer, MatchError, Matching, Status};

use super::{fallback, prepare};

/// Random vertex, random free neighbor (rrm).
///
/// Each drawn free vertex is paired with a uniformly chosen free neighbor.
/// Edge weights are ignored.
pub fn random_random<R: Rng + ?Sized>(
    graph: &Graph,
    matching: &mut Matching,
    limit: usize,
    rng: &mut R,
) -> Result<Status, MatchError> {
    sweep(graph, matching, limit, rng, |_, _| 1.0)
}

/// Random vertex, heaviest free neighbor (rhm).
///
/// Ties among the heaviest free neighbors are broken uniformly at random.
/// Without edge weights this is exactly [`random_random`], consuming the
/// generator identically.
pub fn random_heavy<R: Rng + ?Sized>(
    graph: &Graph,
    matching: &mut Matching,
    limit: usize,
    rng: &mut R,
) -> Result<Status, MatchError> {
    let Some(weights) = graph.edge_weights() else {
        let status = random_random(graph, matching, limit, rng)?;
        return Ok(fallback(graph, "rhm", status));
    };
    sweep(graph, matching, limit, rng, |_, k| weights[k])
}

/// Shared draw loop. `score(vertex, entry)` ranks candidate edges; only
/// free neighbors with the maximal score are eligible.
fn sweep<R, F>(
    graph: &Graph,
    matching: &mut Matching,
    limit: usize,
    rng: &mut R,
    score: F,
) -> Result<Status, MatchError>
where
    R: Rng + ?Sized,
    F: Fn(usize, usize) -> f64,
{
    prepare(graph, matching)?;

    let n = graph.vertex_count();
    let mut pool = try_buffer("vertex pool", n, 0usize)?;
    for (i, slot) in pool.iter_mut().enumerate() {
        *slot = i;
    }

    for remaining in (1..=n).rev() {
        if matching.size() >= limit {
            break;
        }
        let drawn = rng.random_range(0..remaining);
        let vertex = pool[drawn];
        pool[drawn] = pool[remaining - 1];

        if !matching.is_free(vertex) {
            continue;
        }

        let is_candidate = |k: usize| {
            let u = graph.neighbor_at(k);
            u != vertex && matching.is_free(u)
        };

        // Count free neighbors sharing the best score.
        let mut best = 0.0f64;
        let mut ties = 0usize;
        for k in graph.entries(vertex).filter(|&k| is_candidate(k)) {
            let s = score(vertex, k);
            if s > best {
                best = s;
                ties = 1;
            } else if s == best {
                ties += 1;
            }
        }
        if ties == 0 {
            continue;
        }

        let pick = rng.random_range(0..ties);
        let chosen = graph
            .entries(vertex)
            .filter(|&k| is_candidate(k) && score(vertex, k) == best)
            .nth(pick)
            .map(|k| graph.neighbor_at(k));
        if let Some(u) = chosen {
            matching.pair(vertex, u);
        }
    }

    Ok(Status::Ok)
}
