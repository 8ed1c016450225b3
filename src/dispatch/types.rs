//! Selectable methods and their names.

use rand::Rng;

use crate::augment::{augment_three, augment_two};
use crate::graph::Graph;
use crate::heuristics::{
    greedy_heavy, locally_heaviest, maximal, path_growing, random_heavy, random_random,
};
use crate::matching::{MatchError, Matching, Status};
use crate::scaling::vertex_product;

/// Raised when configuration names no known matching method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown matching method {0:?}")]
    UnknownMatching(String),
}

/// Matching heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchingMethod {
    /// `mxm`: maximal matching.
    Maximal,
    /// `rrm`: random vertex, random edge.
    RandomRandom,
    /// `rhm`: random vertex, heavy edge.
    RandomHeavy,
    /// `grm`: greedy heavy edge.
    GreedyHeavy,
    /// `lhm`: locally heaviest.
    LocallyHeaviest,
    /// `pgm`: path growing.
    PathGrowing,
}

impl MatchingMethod {
    pub const ALL: [MatchingMethod; 6] = [
        MatchingMethod::Maximal,
        MatchingMethod::RandomRandom,
        MatchingMethod::RandomHeavy,
        MatchingMethod::GreedyHeavy,
        MatchingMethod::LocallyHeaviest,
        MatchingMethod::PathGrowing,
    ];

    /// Resolves a case-insensitive method name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchingMethod::Maximal => "mxm",
            MatchingMethod::RandomRandom => "rrm",
            MatchingMethod::RandomHeavy => "rhm",
            MatchingMethod::GreedyHeavy => "grm",
            MatchingMethod::LocallyHeaviest => "lhm",
            MatchingMethod::PathGrowing => "pgm",
        }
    }

    /// Runs the heuristic, overwriting `matching`.
    pub fn run<R: Rng + ?Sized>(
        self,
        graph: &Graph,
        matching: &mut Matching,
        limit: usize,
        rng: &mut R,
    ) -> Result<Status, MatchError> {
        match self {
            MatchingMethod::Maximal => maximal(graph, matching, limit),
            MatchingMethod::RandomRandom => random_random(graph, matching, limit, rng),
            MatchingMethod::RandomHeavy => random_heavy(graph, matching, limit, rng),
            MatchingMethod::GreedyHeavy => greedy_heavy(graph, matching, limit),
            MatchingMethod::LocallyHeaviest => locally_heaviest(graph, matching, limit),
            MatchingMethod::PathGrowing => path_growing(graph, matching, limit),
        }
    }
}

/// Post-matching improvement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefinementMethod {
    /// `aug2`: two-step rotation (pass-through).
    TwoStep,
    /// `aug3`: three-step rotation.
    ThreeStep,
}

impl RefinementMethod {
    pub fn from_name(name: &str) -> Option<Self> {
        [RefinementMethod::TwoStep, RefinementMethod::ThreeStep]
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            RefinementMethod::TwoStep => "aug2",
            RefinementMethod::ThreeStep => "aug3",
        }
    }

    pub fn run(
        self,
        graph: &Graph,
        matching: &mut Matching,
        limit: usize,
    ) -> Result<Status, MatchError> {
        match self {
            RefinementMethod::TwoStep => augment_two(graph, matching, limit),
            RefinementMethod::ThreeStep => augment_three(graph, matching, limit),
        }
    }
}

/// Edge-weight scaling rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalingMethod {
    /// `vertex_product`.
    VertexProduct,
}

impl ScalingMethod {
    pub fn from_name(name: &str) -> Option<Self> {
        name.eq_ignore_ascii_case(ScalingMethod::VertexProduct.name())
            .then_some(ScalingMethod::VertexProduct)
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalingMethod::VertexProduct => "vertex_product",
        }
    }

    pub fn apply(self, graph: &mut Graph) -> Result<Status, MatchError> {
        match self {
            ScalingMethod::VertexProduct => vertex_product(graph),
        }
    }
}
