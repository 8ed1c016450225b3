//! CSR graph representation.

use std::ops::Range;

/// Errors raised while assembling a [`Graph`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("offset table must contain at least one entry")]
    EmptyOffsets,

    #[error("offset table must start at 0, got {0}")]
    OffsetStart(usize),

    #[error("offsets decrease at vertex {vertex}")]
    OffsetsDecrease { vertex: usize },

    #[error("last offset is {offset} but there are {neighbors} neighbor entries")]
    OffsetEnd { offset: usize, neighbors: usize },

    #[error("neighbor entry {entry} refers to vertex {vertex}, graph has {vertex_count}")]
    NeighborOutOfRange {
        entry: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("expected {expected} {what} weights, got {actual}")]
    WeightCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("edge weight at entry {entry} must be finite and non-negative, got {weight}")]
    InvalidWeight { entry: usize, weight: f64 },
}

/// Undirected graph in CSR form.
///
/// # Examples
///
/// ```
/// use hg_match::graph::Graph;
///
/// // Path 0 - 1 - 2 with weights 5 and 1.
/// let g = Graph::from_edges(3, &[(0, 1, 5.0), (1, 2, 1.0)]).unwrap();
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.degree(1), 2);
/// assert_eq!(g.edge_weight(2, 1), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GraphParts"))]
pub struct Graph {
    offsets: Vec<usize>,
    neighbors: Vec<usize>,
    edge_weights: Option<Vec<f64>>,
    vertex_weights: Option<Vec<f64>>,
}

impl Graph {
    /// Creates an unweighted graph from an offset table and neighbor array.
    pub fn new(offsets: Vec<usize>, neighbors: Vec<usize>) -> Result<Self, GraphError> {
        let Some(&first) = offsets.first() else {
            return Err(GraphError::EmptyOffsets);
        };
        if first != 0 {
            return Err(GraphError::OffsetStart(first));
        }
        if let Some(vertex) = offsets.windows(2).position(|w| w[1] < w[0]) {
            return Err(GraphError::OffsetsDecrease { vertex });
        }
        let last = offsets[offsets.len() - 1];
        if last != neighbors.len() {
            return Err(GraphError::OffsetEnd {
                offset: last,
                neighbors: neighbors.len(),
            });
        }
        let vertex_count = offsets.len() - 1;
        if let Some((entry, &vertex)) = neighbors
            .iter()
            .enumerate()
            .find(|&(_, &v)| v >= vertex_count)
        {
            return Err(GraphError::NeighborOutOfRange {
                entry,
                vertex,
                vertex_count,
            });
        }

        Ok(Self {
            offsets,
            neighbors,
            edge_weights: None,
            vertex_weights: None,
        })
    }

    /// Attaches one weight per neighbor entry.
    pub fn with_edge_weights(mut self, weights: Vec<f64>) -> Result<Self, GraphError> {
        if weights.len() != self.neighbors.len() {
            return Err(GraphError::WeightCount {
                what: "edge",
                expected: self.neighbors.len(),
                actual: weights.len(),
            });
        }
        if let Some((entry, &weight)) = weights
            .iter()
            .enumerate()
            .find(|&(_, &w)| !w.is_finite() || w < 0.0)
        {
            return Err(GraphError::InvalidWeight { entry, weight });
        }
        self.edge_weights = Some(weights);
        Ok(self)
    }

    /// Attaches one weight per vertex. Only the edge-weight scaling hook reads these.
    pub fn with_vertex_weights(mut self, weights: Vec<f64>) -> Result<Self, GraphError> {
        if weights.len() != self.vertex_count() {
            return Err(GraphError::WeightCount {
                what: "vertex",
                expected: self.vertex_count(),
                actual: weights.len(),
            });
        }
        self.vertex_weights = Some(weights);
        Ok(self)
    }

    /// Builds a weighted graph from an undirected edge list.
    ///
    /// Each edge is stored from both endpoints, in input order.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self, GraphError> {
        let (offsets, neighbors, weights) = assemble(vertex_count, edges)?;
        Self::new(offsets, neighbors)?.with_edge_weights(weights)
    }

    /// Builds an unweighted graph from an undirected edge list.
    pub fn from_unweighted_edges(
        vertex_count: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self, GraphError> {
        let weighted: Vec<(usize, usize, f64)> = edges.iter().map(|&(u, v)| (u, v, 1.0)).collect();
        let (offsets, neighbors, _) = assemble(vertex_count, &weighted)?;
        Self::new(offsets, neighbors)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of neighbor entries (twice the number of undirected edges).
    pub fn edge_entry_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` when edge weights are attached.
    pub fn is_weighted(&self) -> bool {
        self.edge_weights.is_some()
    }

    pub fn has_vertex_weights(&self) -> bool {
        self.vertex_weights.is_some()
    }

    /// Entry range of vertex `v` inside the flat neighbor array.
    pub fn entries(&self, v: usize) -> Range<usize> {
        self.offsets[v]..self.offsets[v + 1]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    /// Neighbors of `v` in stored order.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[self.entries(v)]
    }

    /// Neighbor id stored at a flat entry index.
    pub fn neighbor_at(&self, entry: usize) -> usize {
        self.neighbors[entry]
    }

    /// Weight stored at a flat entry index; `1.0` for unweighted graphs.
    pub fn weight_at(&self, entry: usize) -> f64 {
        self.edge_weights.as_ref().map_or(1.0, |w| w[entry])
    }

    /// All edge weights, parallel to the neighbor array.
    pub fn edge_weights(&self) -> Option<&[f64]> {
        self.edge_weights.as_deref()
    }

    pub fn vertex_weights(&self) -> Option<&[f64]> {
        self.vertex_weights.as_deref()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Weight of the first stored entry `u -> v`, if any.
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<f64> {
        self.entries(u)
            .find(|&k| self.neighbors[k] == v)
            .map(|k| self.weight_at(k))
    }
}

/// Unchecked wire form of a [`Graph`]; deserialization goes through the
/// same validation as [`Graph::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GraphParts {
    offsets: Vec<usize>,
    neighbors: Vec<usize>,
    #[serde(default)]
    edge_weights: Option<Vec<f64>>,
    #[serde(default)]
    vertex_weights: Option<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphParts> for Graph {
    type Error = GraphError;

    fn try_from(parts: GraphParts) -> Result<Self, Self::Error> {
        let mut graph = Graph::new(parts.offsets, parts.neighbors)?;
        if let Some(weights) = parts.edge_weights {
            graph = graph.with_edge_weights(weights)?;
        }
        if let Some(weights) = parts.vertex_weights {
            graph = graph.with_vertex_weights(weights)?;
        }
        Ok(graph)
    }
}

type Csr = (Vec<usize>, Vec<usize>, Vec<f64>);

fn assemble(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Result<Csr, GraphError> {
    let mut degree = vec![0usize; vertex_count];
    for (i, &(u, v, _)) in edges.iter().enumerate() {
        for x in [u, v] {
            if x >= vertex_count {
                return Err(GraphError::NeighborOutOfRange {
                    entry: i,
                    vertex: x,
                    vertex_count,
                });
            }
        }
        degree[u] += 1;
        degree[v] += 1;
    }

    let mut offsets = Vec::with_capacity(vertex_count + 1);
    offsets.push(0);
    for d in &degree {
        offsets.push(offsets[offsets.len() - 1] + d);
    }

    let total = offsets[vertex_count];
    let mut neighbors = vec![0usize; total];
    let mut weights = vec![0.0f64; total];
    let mut cursor = offsets[..vertex_count].to_vec();
    for &(u, v, w) in edges {
        neighbors[cursor[u]] = v;
        weights[cursor[u]] = w;
        cursor[u] += 1;
        neighbors[cursor[v]] = u;
        weights[cursor[v]] = w;
        cursor[v] += 1;
    }

    Ok((offsets, neighbors, weights))
}
