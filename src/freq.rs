//! Sequential rune counting, the unit of work every worker performs

use std::collections::HashMap;

/// Maps each rune to the number of times it was seen.
pub type FreqMap = HashMap<char, usize>;

/// Count the runes of a single text, scanning left to right.
///
/// An empty text yields an empty map.
pub fn frequency(text: &str) -> FreqMap {
    let mut freq = FreqMap::new();
    for c in text.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Count a whole batch on the calling thread.
///
/// This is the baseline the concurrent counters must agree with.
pub fn sequential_frequency<S: AsRef<str>>(batch: &[S]) -> FreqMap {
    let mut freq = FreqMap::new();
    for text in batch {
        merge_into(&mut freq, frequency(text.as_ref()));
    }
    freq
}

/// Add every count of `partial` into `acc`.
#[inline]
pub fn merge_into(acc: &mut FreqMap, partial: FreqMap) {
    // the first partial can be taken as is
    if acc.is_empty() {
        *acc = partial;
        return;
    }
    for (c, count) in partial {
        *acc.entry(c).or_insert(0) += count;
    }
}

/// Total number of runes recorded in the map.
pub fn total(freq: &FreqMap) -> usize {
    freq.values().sum()
}
