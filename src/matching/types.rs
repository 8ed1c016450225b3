//! Partner-array matching.

use crate::graph::Graph;

/// A set of disjoint vertex pairs over `0..len`.
///
/// # Examples
///
/// ```
/// use hg_match::matching::Matching;
///
/// let m = Matching::new(3);
/// assert_eq!(m.size(), 0);
/// assert!(m.is_free(2));
/// assert!(m.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matching {
    partner: Vec<usize>,
    size: usize,
}

impl Matching {
    /// Creates a matching with every vertex unmatched.
    pub fn new(len: usize) -> Self {
        Self {
            partner: (0..len).collect(),
            size: 0,
        }
    }

    /// Number of vertices covered by the partner array.
    pub fn len(&self) -> usize {
        self.partner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }

    /// Number of matched pairs.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn partner(&self, v: usize) -> usize {
        self.partner[v]
    }

    pub fn is_free(&self, v: usize) -> bool {
        self.partner[v] == v
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.partner
    }

    /// Unmatches every vertex.
    pub fn reset(&mut self) {
        for (v, p) in self.partner.iter_mut().enumerate() {
            *p = v;
        }
        self.size = 0;
    }

    /// Matched pairs `(u, v)` with `u < v`, in increasing `u`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partner
            .iter()
            .enumerate()
            .filter(|&(u, &v)| u < v)
            .map(|(u, &v)| (u, v))
    }

    /// Sum of matched edge weights (one per pair for unweighted graphs).
    pub fn total_weight(&self, graph: &Graph) -> f64 {
        self.pairs()
            .map(|(u, v)| graph.edge_weight(u, v).unwrap_or(0.0))
            .sum()
    }

    /// Checks partner symmetry and that `size` counts the pairs.
    pub fn is_valid(&self) -> bool {
        let mut matched = 0usize;
        for (v, &p) in self.partner.iter().enumerate() {
            if p >= self.partner.len() {
                return false;
            }
            if p != v {
                if self.partner[p] != v {
                    return false;
                }
                matched += 1;
            }
        }
        matched == 2 * self.size
    }

    /// Pairs two free, distinct vertices.
    pub(crate) fn pair(&mut self, u: usize, v: usize) {
        debug_assert!(u != v && self.is_free(u) && self.is_free(v));
        self.partner[u] = v;
        self.partner[v] = u;
        self.size += 1;
    }

    /// Dissolves the pair containing `u`.
    pub(crate) fn unpair(&mut self, u: usize) {
        let v = self.partner[u];
        if v != u {
            self.partner[u] = u;
            self.partner[v] = v;
            self.size -= 1;
        }
    }

    /// Replaces the whole state with another partner array.
    pub(crate) fn assign(&mut self, partner: &[usize], size: usize) {
        self.partner.copy_from_slice(partner);
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_and_unpair() {
        let mut m = Matching::new(4);
        m.pair(0, 3);
        m.pair(1, 2);
        assert_eq!(m.size(), 2);
        assert_eq!(m.partner(3), 0);
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 3), (1, 2)]);
        assert!(m.is_valid());

        m.unpair(2);
        assert_eq!(m.size(), 1);
        assert!(m.is_free(1) && m.is_free(2));
        m.unpair(1);
        assert_eq!(m.size(), 1);
        assert!(m.is_valid());
    }

    #[test]
    fn test_reset() {
        let mut m = Matching::new(3);
        m.pair(0, 1);
        m.reset();
        assert_eq!(m.as_slice(), &[0, 1, 2]);
        assert_eq!(m.size(), 0);
    }

    #[test]
    fn test_total_weight() {
        let g = Graph::from_edges(4, &[(0, 1, 5.0), (1, 2, 1.0), (2, 3, 4.0)]).unwrap();
        let mut m = Matching::new(4);
        m.pair(0, 1);
        m.pair(2, 3);
        assert!((m.total_weight(&g) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_detected() {
        let mut m = Matching::new(3);
        m.assign(&[1, 1, 2], 0);
        assert!(!m.is_valid());
        m.assign(&[1, 0, 2], 0);
        assert!(!m.is_valid());
        m.assign(&[1, 0, 2], 1);
        assert!(m.is_valid());
    }

    #[test]
    fn test_empty() {
        let m = Matching::new(0);
        assert!(m.is_empty());
        assert!(m.is_valid());
        assert_eq!(m.pairs().count(), 0);
    }
}
