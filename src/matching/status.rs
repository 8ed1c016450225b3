//! Status codes returned by heuristics and the dispatcher.

/// Successful completion, possibly with a non-fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Status {
    /// Completed normally.
    #[default]
    Ok,

    /// Completed, but a weighted heuristic fell back to its unweighted
    /// variant because the graph carries no edge weights.
    Warning,
}

impl Status {
    /// Returns the more severe of the two statuses.
    pub fn combine(self, other: Status) -> Status {
        self.max(other)
    }
}

/// Failures that leave the matching in an indeterminate state.
///
/// Pairs committed before the failure are not rolled back; callers should
/// discard or reset the matching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// A scratch buffer could not be allocated.
    #[error("insufficient memory for {buffer} ({len} entries)")]
    Memory { buffer: &'static str, len: usize },

    /// An internal inconsistency between graph and matching.
    #[error("fatal matching error: {0}")]
    Fatal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_keeps_worst() {
        assert_eq!(Status::Ok.combine(Status::Ok), Status::Ok);
        assert_eq!(Status::Ok.combine(Status::Warning), Status::Warning);
        assert_eq!(Status::Warning.combine(Status::Ok), Status::Warning);
    }

    #[test]
    fn test_error_messages() {
        let err = MatchError::Memory {
            buffer: "vertex pool",
            len: 10,
        };
        assert_eq!(err.to_string(), "insufficient memory for vertex pool (10 entries)");
        assert!(MatchError::Fatal("x".into()).to_string().contains("x"));
    }
}
