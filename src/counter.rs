//! Interchangeable counting strategies, for comparing approaches side by side

use crate::concurrent::{channel_frequency, concurrent_frequency_with, Channel};
use crate::freq::{sequential_frequency, FreqMap};
use crate::partition::Partition;

/// A way of counting the runes of a batch.
///
/// Every implementation must return the same map as [`Sequential`].
pub trait Counter: Send + Sync {
    /// Short label used in benchmark ids and logs
    fn name(&self) -> String;

    /// Count every rune of every text in the batch
    fn count(&self, batch: &[String]) -> FreqMap;
}

/// Single threaded baseline
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl Counter for Sequential {
    fn name(&self) -> String {
        "sequential".into()
    }

    fn count(&self, batch: &[String]) -> FreqMap {
        sequential_frequency(batch)
    }
}

/// Workers merging into a mutex guarded accumulator
#[derive(Debug, Default, Clone, Copy)]
pub struct Locked(pub Partition);

impl Counter for Locked {
    fn name(&self) -> String {
        format!("locked-{}", self.0)
    }

    fn count(&self, batch: &[String]) -> FreqMap {
        concurrent_frequency_with(batch, self.0)
    }
}

/// Workers sending partial maps to the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct Channelled(pub Channel);

impl Counter for Channelled {
    fn name(&self) -> String {
        format!("channel-{}", self.0)
    }

    fn count(&self, batch: &[String]) -> FreqMap {
        channel_frequency(batch, self.0)
    }
}

/// Every built-in strategy with its default settings, baseline first
pub fn strategies() -> Vec<Box<dyn Counter>> {
    vec![
        Box::new(Sequential),
        Box::new(Locked(Partition::PerElement)),
        Box::new(Channelled(Channel::Bounded)),
        Box::new(Channelled(Channel::Rendezvous)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::NonZeroUsize;

    #[test]
    fn names_are_unique() {
        let mut names = strategies().iter().map(|c| c.name()).collect::<Vec<_>>();
        let len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), len);
        assert_eq!(names[0], "channel-bounded");

        let chunked = Locked(Partition::Chunked(NonZeroUsize::new(4).unwrap()));
        assert_eq!(chunked.name(), "locked-chunked(4)");
    }

    #[test]
    fn strategies_agree() {
        let batch = vec!["Freude schöner".to_string(), "Götterfunken".into(), String::new()];
        let expected = Sequential.count(&batch);
        for counter in strategies() {
            assert_eq!(counter.count(&batch), expected, "{}", counter.name());
        }
    }
}
