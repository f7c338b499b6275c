//! Concurrent aggregation of rune frequencies over a batch of texts
//!
//! Workers count their share of the batch without touching any shared
//! state, then hand the finished partial map over either to a lock
//! protected [`Accumulator`] or through a channel to the calling thread.
//! In both cases the calling thread joins every worker before the result
//! is returned, so no partial total is ever observable.

use crate::accumulator::Accumulator;
use crate::freq::{frequency, merge_into, sequential_frequency, FreqMap};
use crate::partition::Partition;

use core::any::Any;
use core::fmt;
use crossbeam_utils::thread;
use std::panic;

/// Count the runes of every string in `batch`, one worker per string.
///
/// The result is identical to [`sequential_frequency`] whatever order the
/// workers finish in. An empty batch yields an empty map.
pub fn concurrent_frequency<S>(batch: &[S]) -> FreqMap
where
    S: AsRef<str> + Sync,
{
    concurrent_frequency_with(batch, Partition::PerElement)
}

/// Count the runes of every string in `batch`, split by `partition`.
pub fn concurrent_frequency_with<S>(batch: &[S], partition: Partition) -> FreqMap
where
    S: AsRef<str> + Sync,
{
    log::debug!(
        "counting {} texts with {} workers ({partition})",
        batch.len(),
        partition.workers(batch.len())
    );

    let acc = Accumulator::new();
    join_all(|scope| {
        for part in partition.split(batch) {
            let acc = &acc;
            scope.spawn(move |_| {
                // count outside the lock, merge inside it
                let partial = sequential_frequency(part);
                acc.merge(partial);
            });
        }
    });
    acc.into_inner()
}

/// Flavour of channel used by [`channel_frequency`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// room for every partial map, workers never block on send
    #[default]
    Bounded,
    /// zero capacity, every send waits for the collector
    Rendezvous,
}

impl Channel {
    fn capacity(&self, len: usize) -> usize {
        match self {
            Channel::Bounded => len,
            Channel::Rendezvous => 0,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Bounded => write!(f, "bounded"),
            Channel::Rendezvous => write!(f, "rendezvous"),
        }
    }
}

/// Count the runes of every string in `batch`, one worker per string,
/// with the calling thread owning the map.
///
/// Workers send their partial map over a channel and the caller merges
/// them as they arrive, so no lock is involved.
pub fn channel_frequency<S>(batch: &[S], channel: Channel) -> FreqMap
where
    S: AsRef<str> + Sync,
{
    log::debug!("counting {} texts over a {channel} channel", batch.len());

    let (tx, rx) = crossbeam_channel::bounded(channel.capacity(batch.len()));
    let (freq, received) = join_all(|scope| {
        for text in batch {
            let tx = tx.clone();
            scope.spawn(move |_| {
                if tx.send(frequency(text.as_ref())).is_err() {
                    log::error!("collector gone, partial map dropped");
                }
            });
        }
        // the loop below ends once the last worker dropped its sender
        drop(tx);

        let mut freq = FreqMap::new();
        let mut received = 0;
        for partial in rx.iter() {
            merge_into(&mut freq, partial);
            received += 1;
        }
        (freq, received)
    });

    // a panicked worker was already re-raised by join_all
    log::trace!("received {received} partial maps");
    debug_assert_eq!(received, batch.len(), "lost partial maps");
    freq
}

/// Run `f` in a thread scope and wait for every worker it spawned.
///
/// A panicking worker is re-raised here, after all others have joined.
fn join_all<'env, F, R>(f: F) -> R
where
    F: FnOnce(&thread::Scope<'env>) -> R,
{
    match thread::scope(f) {
        Ok(r) => r,
        // crossbeam collects the payloads of every panicked worker
        Err(err) => match err.downcast::<Vec<Box<dyn Any + Send>>>() {
            Ok(mut panics) => match panics.pop() {
                Some(payload) => panic::resume_unwind(payload),
                None => panic::resume_unwind(panics),
            },
            Err(err) => panic::resume_unwind(err),
        },
    }
}
