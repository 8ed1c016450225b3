//! Matching state and outcome reporting.
//!
//! A [`Matching`] is a partner array: `partner[v] == v` marks `v` as
//! unmatched, otherwise `v` and `partner[v]` form a pair and the array
//! stays symmetric. Heuristics and augmentation passes mutate it in place
//! and report a [`Status`] or a [`MatchError`].

mod buffer;
mod status;
mod types;

pub(crate) use buffer::try_buffer;
#[cfg(test)]
pub(crate) use buffer::refuse_buffers_above;
pub use status::{MatchError, Status};
pub use types::Matching;
