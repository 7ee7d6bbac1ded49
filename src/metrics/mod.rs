//! System metrics collection and data structures.
//!
//! This module provides the core functionality for sampling host metrics:
//! CPU utilization, memory, disk usage, network interface counters, and the
//! top resource-consuming processes, merged into one immutable
//! [`Snapshot`](data::Snapshot).

pub mod collector;
pub mod cpu;
pub mod data;
pub mod disk;
pub mod memory;
pub mod network;
pub mod process;
pub mod traits;

// Re-export commonly used items
pub use collector::SnapshotCollector;
pub use data::Snapshot;
