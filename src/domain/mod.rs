//! Domain layer: queue entries, the priority queue itself and tier rules.
//!
//! Nothing in here performs I/O. The queue returns events and snapshots, the
//! console layer decides how to show them.

pub mod entry;
pub mod ports;
pub mod queue;
pub mod tier;
