//! Error handling for the sysdash collection crate.

/// A specialized `Result` type for snapshot collection operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// The main error type for snapshot collection.
///
/// Only the memory probe's failure is fatal for a whole collection; every
/// other probe failure is degraded by the collector (see
/// [`SnapshotCollector::collect`](crate::metrics::SnapshotCollector::collect)).
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The memory probe failed. Memory information is assumed to be
    /// universally available, so this aborts the whole collection.
    #[error("memory information unavailable: {0}")]
    MemoryUnavailable(String),

    /// A probe failed outright (as opposed to dropping individual items,
    /// which is not an error).
    #[error("{probe} probe failed: {reason}")]
    ProbeFailed {
        /// Which probe failed ("cpu", "disk", "network", "process").
        probe: &'static str,
        /// Why it failed.
        reason: String,
    },
}

impl SnapshotError {
    /// Create a new memory-unavailable error.
    pub fn memory_unavailable(msg: impl Into<String>) -> Self {
        Self::MemoryUnavailable(msg.into())
    }

    /// Create a new probe-failure error.
    pub fn probe_failed(probe: &'static str, reason: impl Into<String>) -> Self {
        Self::ProbeFailed {
            probe,
            reason: reason.into(),
        }
    }
}
