//! Matcher configuration.

/// Selector strings and seed for a [`Matcher`](super::Matcher).
///
/// # Examples
///
/// ```
/// use hg_match::dispatch::MatcherConfig;
///
/// let config = MatcherConfig::default()
///     .with_matching("rhm")
///     .with_refinement("aug3")
///     .with_seed(7);
/// assert_eq!(config.matching, "rhm");
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatcherConfig {
    /// Matching heuristic: `mxm`, `rrm`, `rhm`, `grm`, `lhm` or `pgm`.
    pub matching: String,

    /// Refinement pass: `aug2` or `aug3`. Anything else disables it.
    pub refinement: String,

    /// Edge-weight scaling: `vertex_product`. Anything else disables it.
    pub weight_scaling: String,

    /// Random seed. `None` uses [`DEFAULT_SEED`](crate::random::DEFAULT_SEED).
    pub seed: Option<u64>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            matching: "grm".into(),
            refinement: "no".into(),
            weight_scaling: "no".into(),
            seed: None,
        }
    }
}

impl MatcherConfig {
    pub fn with_matching(mut self, name: impl Into<String>) -> Self {
        self.matching = name.into();
        self
    }

    pub fn with_refinement(mut self, name: impl Into<String>) -> Self {
        self.refinement = name.into();
        self
    }

    pub fn with_weight_scaling(mut self, name: impl Into<String>) -> Self {
        self.weight_scaling = name.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatcherConfig::default();
        assert_eq!(config.matching, "grm");
        assert_eq!(config.refinement, "no");
        assert_eq!(config.weight_scaling, "no");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders() {
        let config = MatcherConfig::default()
            .with_matching("lhm")
            .with_refinement("aug2")
            .with_weight_scaling("vertex_product")
            .with_seed(3);
        assert_eq!(config.matching, "lhm");
        assert_eq!(config.refinement, "aug2");
        assert_eq!(config.weight_scaling, "vertex_product");
        assert_eq!(config.seed, Some(3));
    }
}
