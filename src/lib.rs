#![doc = include_str!("../README.md")]

pub mod accumulator;
pub mod concurrent;
pub mod counter;
pub mod freq;
pub mod partition;
pub mod workload;

pub use accumulator::Accumulator;
pub use concurrent::{
    channel_frequency, concurrent_frequency, concurrent_frequency_with, Channel,
};
pub use counter::{strategies, Channelled, Counter, Locked, Sequential};
pub use freq::{frequency, sequential_frequency, FreqMap};
pub use partition::Partition;
pub use workload::make_workload;
