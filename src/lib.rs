//! Pluggable graph-matching engine for multilevel coarsening.
//!
//! Given an undirected weighted graph in CSR form, computes a matching
//! (a set of disjoint vertex pairs) with one of several interchangeable
//! heuristics and optionally improves it with a local-search pass:
//!
//! - **Heuristics**: maximal (`mxm`), random-random (`rrm`),
//!   random-heavy (`rhm`), greedy-heavy (`grm`), locally-heaviest
//!   (`lhm`) and path-growing (`pgm`).
//! - **Augmentation**: two-step (`aug2`) and three-step (`aug3`)
//!   rotations.
//! - **Scaling**: an edge-weight scaling hook (`vertex_product`).
//! - **Dispatch**: [`dispatch::Matcher`] resolves the selector strings
//!   once and runs `[scaling] -> matching -> [refinement]`.
//!
//! None of the heuristics guarantees a maximum-weight matching; each is a
//! bounded-time approximation. Building the graph, the multilevel driver
//! and any distribution across processes live outside this crate.
//!
//! # Examples
//!
//! ```
//! use hg_match::dispatch::{Matcher, MatcherConfig};
//! use hg_match::graph::Graph;
//!
//! let mut g = Graph::from_edges(4, &[(0, 1, 1.0), (1, 2, 5.0), (2, 3, 1.0)]).unwrap();
//! let mut matcher = Matcher::new(&MatcherConfig::default()).unwrap();
//! let outcome = matcher.run(&mut g, usize::MAX).unwrap();
//! assert_eq!(outcome.matching.pairs().collect::<Vec<_>>(), vec![(1, 2)]);
//! ```

pub mod augment;
pub mod dispatch;
pub mod graph;
pub mod heuristics;
pub mod matching;
pub mod random;
pub mod scaling;
