//! Maximal matching (mxm).

use crate::graph::Graph;
use crate::matching::{MatchError, Matching, Status};

use super::prepare;

/// Sweeps vertices in id order and pairs each free vertex with its first
/// free neighbor in stored order.
///
/// Deterministic for a fixed graph encoding. Stops once `limit` pairs
/// have been formed.
///
/// # Examples
///
/// ```
/// use hg_match::graph::Graph;
/// use hg_match::heuristics::maximal;
/// use hg_match::matching::Matching;
///
/// let g = Graph::from_unweighted_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// let mut m = Matching::new(4);
/// maximal(&g, &mut m, usize::MAX).unwrap();
/// assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
/// ```
pub fn maximal(graph: &Graph, matching: &mut Matching, limit: usize) -> Result<Status, MatchError> {
    prepare(graph, matching)?;

    for v in 0..graph.vertex_count() {
        if matching.size() >= limit {
            break;
        }
        if !matching.is_free(v) {
            continue;
        }
        if let Some(&u) = graph
            .neighbors(v)
            .iter()
            .find(|&&u| u != v && matching.is_free(u))
        {
            matching.pair(v, u);
        }
    }

    Ok(Status::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::fixtures;

    #[test]
    fn test_path_takes_outer_edges() {
        let g = fixtures::path4(1.0, 5.0, 1.0);
        let mut m = Matching::new(4);
        assert_eq!(maximal(&g, &mut m, usize::MAX), Ok(Status::Ok));
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert!((m.total_weight(&g) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_limit_respected() {
        let g = fixtures::triangle();
        let mut m = Matching::new(3);
        maximal(&g, &mut m, 1).unwrap();
        assert_eq!(m.size(), 1);
        assert_eq!(m.as_slice(), &[1, 0, 2]);

        let g = fixtures::path4(1.0, 1.0, 1.0);
        let mut m = Matching::new(4);
        maximal(&g, &mut m, 0).unwrap();
        assert_eq!(m.size(), 0);
    }

    #[test]
    fn test_result_is_maximal() {
        let g = fixtures::grid();
        let mut m = Matching::new(g.vertex_count());
        maximal(&g, &mut m, usize::MAX).unwrap();
        assert!(m.is_valid());
        for v in 0..g.vertex_count() {
            if m.is_free(v) {
                assert!(g.neighbors(v).iter().all(|&u| !m.is_free(u)));
            }
        }
    }

    #[test]
    fn test_self_loop_ignored() {
        let g = Graph::new(vec![0, 2, 3], vec![0, 1, 0]).unwrap();
        let mut m = Matching::new(2);
        maximal(&g, &mut m, usize::MAX).unwrap();
        assert_eq!(m.as_slice(), &[1, 0]);
    }

    #[test]
    fn test_resets_previous_state() {
        let g = fixtures::path4(1.0, 1.0, 1.0);
        let mut m = Matching::new(4);
        m.pair(1, 2);
        maximal(&g, &mut m, usize::MAX).unwrap();
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_mismatched_length_is_fatal() {
        let g = fixtures::triangle();
        let mut m = Matching::new(2);
        assert!(matches!(maximal(&g, &mut m, 1), Err(MatchError::Fatal(_))));
    }

    #[test]
    fn test_empty_graph() {
        let g = fixtures::empty();
        let mut m = Matching::new(0);
        assert_eq!(maximal(&g, &mut m, usize::MAX), Ok(Status::Ok));
        assert_eq!(m.size(), 0);
    }
}
