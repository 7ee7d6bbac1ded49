//! # sysdash - One-Shot System Health Snapshots
//!
//! A small Rust crate for sampling host metrics (CPU, memory, disks, network
//! interfaces, top processes) into a single immutable snapshot, with JSON
//! serialization and a self-contained HTML report.
//!
//! ## Features
//!
//! - **One-shot collection**: each call samples fresh, no background tasks
//! - **Two-phase CPU and process sampling**: baseline, wait, delta
//! - **Partial-failure tolerance**: unreadable partitions and exited
//!   processes are dropped, not errors
//! - **Library + Binary**: use as a crate or from the `sysdash` CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use sysdash::SnapshotCollector;
//!
//! fn main() -> sysdash::Result<()> {
//!     let mut collector = SnapshotCollector::new();
//!     let snapshot = collector.collect(Duration::from_secs(1), 5, true)?;
//!     println!("cpu load: {:.1}%", snapshot.cpu.load_percent);
//!     Ok(())
//! }
//! ```

use std::time::Duration;

pub mod error;
pub mod metrics;
pub mod report;

// Re-export public API
pub use error::{Result, SnapshotError};
pub use metrics::{
    collector::SnapshotCollector,
    data::{
        CpuInfo, DiskPartitionUsage, MemoryInfo, NetworkInterface, ProcessInfo, Snapshot,
        SnapshotMeta,
    },
};
pub use report::render_html;

/// The default CPU sampling interval
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// The default process-sampling interval, independent of the CPU interval
pub const DEFAULT_PROCESS_INTERVAL: Duration = Duration::from_millis(500);

/// The default number of top processes to report
pub const DEFAULT_TOP_PROCESSES: usize = 5;
