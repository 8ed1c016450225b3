//! Locally heaviest matching (lhm).
//!
//! Before committing an edge `(a, b)`, both endpoints look further along
//! their own adjacency for a preferable edge and settle that one first.
//! Each vertex owns an exploration cursor into its neighbor slice so no
//! entry is examined twice; an exploration that ends with one endpoint
//! still free rewinds that endpoint's cursor so a later caller can
//! reconsider the same edges.

use crate::graph::Graph;
use crate::matching::{try_buffer, MatchError, Matching, Status};

use super::{fallback, maximal, prepare};

/// Computes a locally heaviest matching.
///
/// Falls back to [`maximal`] on unweighted graphs.
pub fn locally_heaviest(
    graph: &Graph,
    matching: &mut Matching,
    limit: usize,
) -> Result<Status, MatchError> {
    let Some(weights) = graph.edge_weights() else {
        let status = maximal(graph, matching, limit)?;
        return Ok(fallback(graph, "lhm", status));
    };
    prepare(graph, matching)?;

    let mut explorer = Explorer {
        graph,
        weights,
        cursor: try_buffer("exploration cursors", graph.vertex_count(), 0usize)?,
        frames: Vec::new(),
        limit,
    };
    explorer
        .cursor
        .copy_from_slice(&graph.offsets()[..graph.vertex_count()]);

    for a in 0..graph.vertex_count() {
        if matching.size() >= limit {
            break;
        }
        for k in graph.entries(a) {
            if !matching.is_free(a) {
                break;
            }
            let b = graph.neighbor_at(k);
            if b != a && matching.is_free(b) {
                explorer.explore(matching, a, b, weights[k])?;
            }
        }
    }

    Ok(Status::Ok)
}

/// Where a suspended exploration resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Re-check whether both endpoints are still free and unexplored.
    Check,
    /// Examine the next entry of `a`.
    SideA,
    /// Examine the next entry of `b`.
    SideB,
}

/// One pending attempt to match `a` with `b`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    a: usize,
    b: usize,
    weight: f64,
    saved_a: usize,
    saved_b: usize,
    phase: Phase,
}

struct Explorer<'a> {
    graph: &'a Graph,
    weights: &'a [f64],
    cursor: Vec<usize>,
    frames: Vec<Frame>,
    limit: usize,
}

impl Explorer<'_> {
    fn end(&self, v: usize) -> usize {
        self.graph.offsets()[v + 1]
    }

    /// Tries to match `a` with `b`, first settling any preferable edge
    /// incident to either endpoint.
    ///
    /// Nested attempts live on a heap frame stack, so long chains of
    /// preferred edges cannot exhaust the call stack.
    fn explore(
        &mut self,
        matching: &mut Matching,
        a: usize,
        b: usize,
        weight_ab: f64,
    ) -> Result<(), MatchError> {
        self.frames.clear();
        self.push(a, b, weight_ab)?;

        while let Some(top) = self.frames.len().checked_sub(1) {
            let Frame {
                a,
                b,
                weight,
                phase,
                ..
            } = self.frames[top];

            match phase {
                Phase::Check => {
                    let active = matching.is_free(a)
                        && matching.is_free(b)
                        && (self.cursor[a] < self.end(a) || self.cursor[b] < self.end(b))
                        && matching.size() < self.limit;
                    if active {
                        self.frames[top].phase = Phase::SideA;
                    } else {
                        self.finish(matching, top);
                    }
                }
                Phase::SideA => {
                    self.frames[top].phase = Phase::SideB;
                    if self.cursor[a] < self.end(a) {
                        let degree_b = self.graph.degree(b);
                        if let Some((c, weight_ac)) = self.advance(a, weight, degree_b) {
                            self.push(a, c, weight_ac)?;
                        }
                    }
                }
                Phase::SideB => {
                    self.frames[top].phase = Phase::Check;
                    if matching.is_free(b) && self.cursor[b] < self.end(b) {
                        let degree_a = self.graph.degree(a);
                        if let Some((c, weight_bc)) = self.advance(b, weight, degree_a) {
                            self.push(b, c, weight_bc)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn push(&mut self, a: usize, b: usize, weight: f64) -> Result<(), MatchError> {
        if self.frames.len() == self.frames.capacity() {
            let extra = self.frames.len().max(16);
            if self.frames.try_reserve(extra).is_err() {
                log::warn!("lhm: failed to grow exploration stack past {} frames", self.frames.len());
                return Err(MatchError::Memory {
                    buffer: "exploration frames",
                    len: self.frames.len() + extra,
                });
            }
        }
        self.frames.push(Frame {
            a,
            b,
            weight,
            saved_a: self.cursor[a],
            saved_b: self.cursor[b],
            phase: Phase::Check,
        });
        Ok(())
    }

    /// Decides the frame at `top` and pops it. A frame left with exactly
    /// one free endpoint rewinds that endpoint's cursor.
    fn finish(&mut self, matching: &mut Matching, top: usize) {
        let frame = self.frames[top];
        let (free_a, free_b) = (matching.is_free(frame.a), matching.is_free(frame.b));
        if free_a && free_b && matching.size() < self.limit {
            matching.pair(frame.a, frame.b);
        } else if free_a && !free_b {
            self.cursor[frame.a] = frame.saved_a;
        } else if !free_a && free_b {
            self.cursor[frame.b] = frame.saved_b;
        }
        self.frames.truncate(top);
    }

    /// Consumes the next entry of `v` and returns it if it beats the edge
    /// under consideration, whose opposite endpoint has `opposite_degree`.
    fn advance(&mut self, v: usize, weight_ab: f64, opposite_degree: usize) -> Option<(usize, f64)> {
        let k = self.cursor[v];
        self.cursor[v] += 1;
        let c = self.graph.neighbor_at(k);
        let weight = self.weights[k];
        if c != v && prefers(weight, self.graph.degree(c), weight_ab, opposite_degree) {
            Some((c, weight))
        } else {
            None
        }
    }
}

/// Whether an edge to `c` should be settled before the current edge.
///
/// Heavier wins; on equal weight the candidate with strictly smaller
/// degree wins. Pendant vertices (degree 1) get a factor-two relaxation
/// in both directions.
fn prefers(weight_c: f64, degree_c: usize, weight_ab: f64, opposite_degree: usize) -> bool {
    if opposite_degree > 1 {
        (degree_c > 1
            && (weight_c > weight_ab || (weight_c == weight_ab && degree_c < opposite_degree)))
            || (degree_c == 1 && 2.0 * weight_c >= weight_ab)
    } else {
        (degree_c > 1 && weight_c > 2.0 * weight_ab) || (degree_c == 1 && weight_c > weight_ab)
    }
}
