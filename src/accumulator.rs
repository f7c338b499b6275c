//! The shared running total that workers merge into

use crate::freq::{merge_into, FreqMap};
use parking_lot::Mutex;

/// A lock protected [`FreqMap`] that can only be added to.
///
/// There is no way to read the map while it is shared; the total is only
/// handed out by [`Accumulator::into_inner`], which needs ownership and so
/// can only happen after every worker holding a reference is gone.
#[derive(Debug, Default)]
pub struct Accumulator {
    total: Mutex<FreqMap>,
}

impl Accumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge an already computed partial map.
    ///
    /// The lock is held only for the additions, never for counting.
    pub fn merge(&self, partial: FreqMap) {
        if partial.is_empty() {
            return;
        }
        let runes = partial.len();
        let mut total = self.total.lock();
        merge_into(&mut total, partial);
        log::trace!("merged {runes} distinct runes, {} tracked", total.len());
    }

    /// Consume the accumulator and return the final counts
    pub fn into_inner(self) -> FreqMap {
        self.total.into_inner()
    }
}
