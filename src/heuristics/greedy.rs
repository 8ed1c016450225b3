//! Greedy heavy-edge matching (grm).

use crate::graph::Graph;
use crate::matching::{try_buffer, MatchError, Matching, Status};

use super::{fallback, maximal, prepare};

/// Visits every neighbor entry in descending weight order and pairs its
/// endpoints whenever both are still free.
///
/// This is the classical greedy 1/2-approximation of maximum-weight
/// matching. Falls back to [`maximal`] on unweighted graphs.
///
/// # Examples
///
/// ```
/// use hg_match::graph::Graph;
/// use hg_match::heuristics::greedy_heavy;
/// use hg_match::matching::Matching;
///
/// let g = Graph::from_edges(4, &[(0, 1, 1.0), (1, 2, 5.0), (2, 3, 1.0)]).unwrap();
/// let mut m = Matching::new(4);
/// greedy_heavy(&g, &mut m, usize::MAX).unwrap();
/// assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(1, 2)]);
/// ```
pub fn greedy_heavy(
    graph: &Graph,
    matching: &mut Matching,
    limit: usize,
) -> Result<Status, MatchError> {
    let Some(weights) = graph.edge_weights() else {
        let status = maximal(graph, matching, limit)?;
        return Ok(fallback(graph, "grm", status));
    };
    prepare(graph, matching)?;

    let entries = graph.edge_entry_count();
    let mut sorted = try_buffer("sorted entries", entries, 0usize)?;
    let mut owner = try_buffer("entry owners", entries, 0usize)?;
    for (k, slot) in sorted.iter_mut().enumerate() {
        *slot = k;
    }
    for v in 0..graph.vertex_count() {
        for k in graph.entries(v) {
            owner[k] = v;
        }
    }

    sorted.sort_unstable_by(|&a, &b| weights[b].total_cmp(&weights[a]));

    for &k in &sorted {
        if matching.size() >= limit {
            break;
        }
        let (u, v) = (owner[k], graph.neighbor_at(k));
        if u != v && matching.is_free(u) && matching.is_free(v) {
            matching.pair(u, v);
        }
    }

    Ok(Status::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::fixtures;

    #[test]
    fn test_heavy_outer_edges() {
        let g = fixtures::path4(5.0, 1.0, 5.0);
        let mut m = Matching::new(4);
        assert_eq!(greedy_heavy(&g, &mut m, usize::MAX), Ok(Status::Ok));
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert!((m.total_weight(&g) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_heavy_middle_edge_beats_maximal() {
        let g = fixtures::path4(1.0, 5.0, 1.0);
        let mut greedy = Matching::new(4);
        greedy_heavy(&g, &mut greedy, usize::MAX).unwrap();
        assert_eq!(greedy.pairs().collect::<Vec<_>>(), vec![(1, 2)]);
        assert!(greedy.is_free(0) && greedy.is_free(3));

        let mut mxm = Matching::new(4);
        maximal(&g, &mut mxm, usize::MAX).unwrap();
        assert!(greedy.total_weight(&g) > mxm.total_weight(&g));
    }

    #[test]
    fn test_deterministic() {
        let g = fixtures::grid();
        let mut a = Matching::new(g.vertex_count());
        let mut b = Matching::new(g.vertex_count());
        greedy_heavy(&g, &mut a, usize::MAX).unwrap();
        greedy_heavy(&g, &mut b, usize::MAX).unwrap();
        assert_eq!(a, b);
        assert!(a.is_valid());
    }

    #[test]
    fn test_limit_one_on_triangle() {
        let g = fixtures::triangle();
        let mut m = Matching::new(3);
        greedy_heavy(&g, &mut m, 1).unwrap();
        assert_eq!(m.size(), 1);
    }

    #[test]
    fn test_unweighted_falls_back_to_maximal() {
        let g = Graph::from_unweighted_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut m = Matching::new(4);
        assert_eq!(greedy_heavy(&g, &mut m, usize::MAX), Ok(Status::Warning));
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_empty_graph() {
        let g = fixtures::empty();
        let mut m = Matching::new(0);
        assert_eq!(greedy_heavy(&g, &mut m, usize::MAX), Ok(Status::Ok));
        assert_eq!(m.size(), 0);
    }
}
