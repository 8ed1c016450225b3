//! Fallible allocation of per-call scratch buffers.

use super::MatchError;

#[cfg(test)]
use std::cell::Cell;

#[cfg(test)]
thread_local! {
    static REFUSE_ABOVE: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Makes every buffer longer than `len` fail to allocate on this thread.
#[cfg(test)]
pub(crate) fn refuse_buffers_above(len: Option<usize>) {
    REFUSE_ABOVE.with(|cap| cap.set(len));
}

#[cfg(test)]
fn refused(len: usize) -> bool {
    REFUSE_ABOVE.with(|cap| cap.get().is_some_and(|cap| len > cap))
}

#[cfg(not(test))]
fn refused(_len: usize) -> bool {
    false
}

/// Allocates a buffer of `len` copies of `value`, reporting allocation
/// failure instead of aborting.
pub(crate) fn try_buffer<T: Clone>(
    buffer: &'static str,
    len: usize,
    value: T,
) -> Result<Vec<T>, MatchError> {
    let mut v = Vec::new();
    if refused(len) || v.try_reserve_exact(len).is_err() {
        log::warn!("failed to allocate {buffer} with {len} entries");
        return Err(MatchError::Memory { buffer, len });
    }
    v.resize(len, value);
    Ok(v)
}
