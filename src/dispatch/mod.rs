//! Method resolution and orchestration.
//!
//! A [`Matcher`] resolves the three selector strings of a
//! [`MatcherConfig`] once, owns the random generator, and runs
//! `[scaling] -> matching -> [refinement]` on each call.
//!
//! Unknown matching names are rejected with
//! [`ConfigError::UnknownMatching`]; unknown refinement or scaling names
//! select nothing.

mod config;
mod runner;
mod types;

pub use config::MatcherConfig;
pub use runner::{MatchOutcome, Matcher};
pub use types::{ConfigError, MatchingMethod, RefinementMethod, ScalingMethod};
