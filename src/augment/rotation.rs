//! Two- and three-step augmenting rotations (aug2, aug3).

use crate::graph::Graph;
use crate::matching::{try_buffer, MatchError, Matching, Status};

use super::check_len;

/// Minimum gain for a rotation to be applied.
pub const GAIN_EPSILON: f64 = 1e-6;

/// Two-step rotation pass (aug2).
///
/// Selectable, but leaves the matching untouched.
pub fn augment_two(
    graph: &Graph,
    matching: &mut Matching,
    _limit: usize,
) -> Result<Status, MatchError> {
    check_len(graph, matching)?;
    Ok(Status::Ok)
}

/// Best three-edge rotation found so far for one free vertex:
/// `i - near` becomes matched, `near - middle` is dissolved and
/// `middle - distant` becomes matched.
#[derive(Debug, Clone, Copy)]
struct Rotation {
    gain: f64,
    near: usize,
    middle: usize,
    distant: usize,
}

/// Three-step rotation pass (aug3).
///
/// Every vertex free at the start is pushed on a work stack. For a popped
/// free vertex `i`, each edge `(i, n1)` is examined:
///
/// - `n1` free: pair `i` with `n1` and move on.
/// - `n1` matched to `n2`: record the swap gain `w(i,n1) - w(n1,n2)`, and
///   for each free `n3 != i` adjacent to `n2` the rotation gain
///   `w(i,n1) - w(n1,n2) + w(n2,n3)`.
///
/// The best rotation is applied if its gain exceeds [`GAIN_EPSILON`];
/// otherwise the best swap is, freeing `n2` and pushing it back on the
/// stack. Unweighted edges count as weight 1. Total matched weight never
/// decreases.
pub fn augment_three(
    graph: &Graph,
    matching: &mut Matching,
    limit: usize,
) -> Result<Status, MatchError> {
    check_len(graph, matching)?;

    let n = graph.vertex_count();
    let mut stack = try_buffer("work stack", n, 0usize)?;
    stack.clear();
    stack.extend((0..n).filter(|&v| matching.is_free(v)));

    let mut rotations = 0usize;
    let mut swaps = 0usize;

    while matching.size() < limit {
        let Some(i) = stack.pop() else {
            break;
        };
        if !matching.is_free(i) {
            continue;
        }

        let mut best_swap: Option<(f64, usize)> = None;
        let mut best_rotation: Option<Rotation> = None;

        for k in graph.entries(i) {
            if !matching.is_free(i) {
                break;
            }
            let n1 = graph.neighbor_at(k);
            if n1 == i {
                continue;
            }
            let w1 = graph.weight_at(k);
            if matching.is_free(n1) {
                matching.pair(i, n1);
                continue;
            }

            let n2 = matching.partner(n1);
            let w2 = graph.edge_weight(n1, n2).ok_or_else(|| {
                MatchError::Fatal(format!("matched pair ({n1}, {n2}) has no edge"))
            })?;
            let swap_gain = w1 - w2;
            if best_swap.is_none_or(|(gain, _)| swap_gain > gain) {
                best_swap = Some((swap_gain, n1));
            }

            for k3 in graph.entries(n2) {
                let n3 = graph.neighbor_at(k3);
                if n3 == n2 || n3 == i || !matching.is_free(n3) {
                    continue;
                }
                let gain = swap_gain + graph.weight_at(k3);
                if best_rotation.is_none_or(|r| gain > r.gain) {
                    best_rotation = Some(Rotation {
                        gain,
                        near: n1,
                        middle: n2,
                        distant: n3,
                    });
                }
            }
        }

        if !matching.is_free(i) {
            continue;
        }
        match (best_rotation, best_swap) {
            (Some(r), _) if r.gain > GAIN_EPSILON => {
                matching.unpair(r.near);
                matching.pair(i, r.near);
                matching.pair(r.middle, r.distant);
                rotations += 1;
            }
            (_, Some((gain, near))) if gain > GAIN_EPSILON => {
                let freed = matching.partner(near);
                matching.unpair(near);
                matching.pair(i, near);
                stack.push(freed);
                swaps += 1;
            }
            _ => {}
        }
    }

    log::debug!(
        "aug3: {rotations} rotations, {swaps} swaps, {} pairs",
        matching.size()
    );
    Ok(Status::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{fixtures, maximal};

    #[test]
    fn test_aug2_is_pass_through() {
        let g = fixtures::path4(1.0, 5.0, 1.0);
        let mut m = Matching::new(4);
        maximal(&g, &mut m, usize::MAX).unwrap();
        let before = m.clone();
        assert_eq!(augment_two(&g, &mut m, usize::MAX), Ok(Status::Ok));
        assert_eq!(m, before);
    }

    #[test]
    fn test_rotation_adds_pair() {
        // 0-1 matched (1), 2 free: rotation 3-0, 0-1 dissolved, 1-2.
        let g = Graph::from_edges(4, &[(0, 1, 1.0), (1, 2, 3.0), (0, 3, 3.0)]).unwrap();
        let mut m = Matching::new(4);
        m.pair(0, 1);
        augment_three(&g, &mut m, usize::MAX).unwrap();
        assert!(m.is_valid());
        assert_eq!(m.size(), 2);
        assert!((m.total_weight(&g) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_swap_improves_weight() {
        // 1-2 matched (1); 0-1 is heavier (5). Swapping frees 2.
        let g = Graph::from_edges(3, &[(0, 1, 5.0), (1, 2, 1.0)]).unwrap();
        let mut m = Matching::new(3);
        m.pair(1, 2);
        augment_three(&g, &mut m, usize::MAX).unwrap();
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1)]);
        assert!(m.is_free(2));
    }

    #[test]
    fn test_free_neighbor_matched_directly() {
        let g = Graph::from_unweighted_edges(4, &[(0, 1), (2, 3)]).unwrap();
        let mut m = Matching::new(4);
        m.pair(0, 1);
        augment_three(&g, &mut m, usize::MAX).unwrap();
        assert_eq!(m.size(), 2);
    }

    #[test]
    fn test_unweighted_swap_has_no_gain() {
        let g = Graph::from_unweighted_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let mut m = Matching::new(3);
        m.pair(1, 2);
        augment_three(&g, &mut m, usize::MAX).unwrap();
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_never_decreases_weight() {
        let g = fixtures::grid();
        let mut m = Matching::new(g.vertex_count());
        maximal(&g, &mut m, usize::MAX).unwrap();
        let before = m.total_weight(&g);
        augment_three(&g, &mut m, usize::MAX).unwrap();
        assert!(m.is_valid());
        assert!(m.total_weight(&g) + 1e-9 >= before);
    }

    #[test]
    fn test_limit_stops_growth() {
        let g = Graph::from_unweighted_edges(4, &[(0, 1), (2, 3)]).unwrap();
        let mut m = Matching::new(4);
        m.pair(0, 1);
        augment_three(&g, &mut m, 1).unwrap();
        assert_eq!(m.size(), 1);
    }

    #[test]
    fn test_unmatched_pair_without_edge_is_fatal() {
        let g = Graph::from_edges(3, &[(0, 1, 1.0)]).unwrap();
        let mut m = Matching::new(3);
        // 1 and 2 share no edge.
        m.pair(1, 2);
        assert!(matches!(
            augment_three(&g, &mut m, usize::MAX),
            Err(MatchError::Fatal(_))
        ));
    }

    #[test]
    fn test_empty_graph() {
        let g = fixtures::empty();
        let mut m = Matching::new(0);
        assert_eq!(augment_three(&g, &mut m, usize::MAX), Ok(Status::Ok));
        assert_eq!(augment_two(&g, &mut m, usize::MAX), Ok(Status::Ok));
    }
}
