//! Matcher execution.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::MatcherConfig;
use super::types::{ConfigError, MatchingMethod, RefinementMethod, ScalingMethod};
use crate::graph::Graph;
use crate::matching::{MatchError, Matching, Status};
use crate::random::{create_rng, DEFAULT_SEED};

/// Result of a [`Matcher::run`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// The computed matching.
    pub matching: Matching,

    /// Most severe status over all stages.
    pub status: Status,
}

/// Resolved matching pipeline with its own random generator.
///
/// # Examples
///
/// ```
/// use hg_match::dispatch::{Matcher, MatcherConfig};
/// use hg_match::graph::Graph;
/// use hg_match::matching::Status;
///
/// let mut g = Graph::from_edges(4, &[(0, 1, 5.0), (1, 2, 1.0), (2, 3, 5.0)]).unwrap();
/// let config = MatcherConfig::default().with_matching("grm").with_refinement("aug3");
/// let mut matcher = Matcher::new(&config).unwrap();
///
/// let outcome = matcher.run(&mut g, usize::MAX).unwrap();
/// assert_eq!(outcome.status, Status::Ok);
/// assert_eq!(outcome.matching.size(), 2);
/// ```
pub struct Matcher<R = StdRng> {
    matching: MatchingMethod,
    refinement: Option<RefinementMethod>,
    scaling: Option<ScalingMethod>,
    rng: R,
}

impl Matcher<StdRng> {
    /// Resolves `config` and seeds the generator once.
    pub fn new(config: &MatcherConfig) -> Result<Self, ConfigError> {
        let rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Matcher<R> {
    /// Resolves `config` using a caller-provided generator.
    pub fn with_rng(config: &MatcherConfig, rng: R) -> Result<Self, ConfigError> {
        let matching = MatchingMethod::from_name(&config.matching)
            .ok_or_else(|| ConfigError::UnknownMatching(config.matching.clone()))?;
        let refinement = RefinementMethod::from_name(&config.refinement);
        let scaling = ScalingMethod::from_name(&config.weight_scaling);

        log::debug!(
            "resolved matching={} refinement={} scaling={}",
            matching.name(),
            refinement.map_or("none", RefinementMethod::name),
            scaling.map_or("none", ScalingMethod::name)
        );

        Ok(Self {
            matching,
            refinement,
            scaling,
            rng,
        })
    }

    pub fn matching_method(&self) -> MatchingMethod {
        self.matching
    }

    pub fn refinement_method(&self) -> Option<RefinementMethod> {
        self.refinement
    }

    pub fn scaling_method(&self) -> Option<ScalingMethod> {
        self.scaling
    }

    /// Computes a fresh matching of at most `limit` pairs.
    pub fn run(&mut self, graph: &mut Graph, limit: usize) -> Result<MatchOutcome, MatchError> {
        let mut matching = Matching::new(graph.vertex_count());
        let status = self.run_into(graph, &mut matching, limit)?;
        Ok(MatchOutcome { matching, status })
    }

    /// Runs `[scaling] -> matching -> [refinement]` into a caller-owned
    /// matching.
    ///
    /// On error the matching is indeterminate and refinement is skipped.
    pub fn run_into(
        &mut self,
        graph: &mut Graph,
        matching: &mut Matching,
        limit: usize,
    ) -> Result<Status, MatchError> {
        let mut status = Status::Ok;

        if graph.has_vertex_weights() {
            if let Some(scaling) = self.scaling {
                status = status.combine(scaling.apply(graph)?);
            }
        }

        status = status.combine(self.matching.run(graph, matching, limit, &mut self.rng)?);
        log::debug!(
            "{}: {} pairs on {} vertices",
            self.matching.name(),
            matching.size(),
            graph.vertex_count()
        );

        if let Some(refinement) = self.refinement {
            status = status.combine(refinement.run(graph, matching, limit)?);
            log::debug!(
                "{}: {} pairs, weight {:.3}",
                refinement.name(),
                matching.size(),
                matching.total_weight(graph)
            );
        }

        Ok(status)
    }
}
