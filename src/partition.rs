//! How a batch is split across workers

use core::fmt;
use core::num::NonZeroUsize;

/// Partitioning policy of the concurrent counters.
///
/// No heuristic picks a chunk size. One worker per string is cheap to
/// reason about but not the fastest split for every input shape; callers
/// that know their workload can group strings with [`Partition::Chunked`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// one worker for every string of the batch
    #[default]
    PerElement,
    /// one worker for every run of `n` consecutive strings
    Chunked(NonZeroUsize),
}

impl Partition {
    /// Number of strings handed to a single worker
    #[inline]
    pub fn chunk_size(&self) -> usize {
        match self {
            Partition::PerElement => 1,
            Partition::Chunked(n) => n.get(),
        }
    }

    /// Number of workers a batch of `len` strings is split into
    pub fn workers(&self, len: usize) -> usize {
        len.div_ceil(self.chunk_size())
    }

    /// Split the batch into the slices each worker will count.
    ///
    /// An empty batch yields no slice at all.
    pub fn split<'a, S>(&self, batch: &'a [S]) -> core::slice::Chunks<'a, S> {
        batch.chunks(self.chunk_size())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::PerElement => write!(f, "per-element"),
            Partition::Chunked(n) => write!(f, "chunked({n})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Partition;
    use core::num::NonZeroUsize;

    #[test]
    fn per_element() {
        let p = Partition::default();
        assert_eq!(p, Partition::PerElement);
        assert_eq!(p.workers(0), 0);
        assert_eq!(p.workers(7), 7);
        let batch = ["a", "b", "c"];
        let parts = p.split(&batch).collect::<Vec<_>>();
        assert_eq!(parts, vec![&["a"][..], &["b"][..], &["c"][..]]);
    }

    #[test]
    fn chunked() {
        let p = Partition::Chunked(NonZeroUsize::new(3).unwrap());
        assert_eq!(p.workers(0), 0);
        assert_eq!(p.workers(3), 1);
        assert_eq!(p.workers(7), 3);

        let batch = ["a", "b", "c", "d", "e", "f", "g"];
        let sizes = p.split(&batch).map(|s| s.len()).collect::<Vec<_>>();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_eq!(p.split::<&str>(&[]).count(), 0);
        assert_eq!(p.to_string(), "chunked(3)");
    }
}
