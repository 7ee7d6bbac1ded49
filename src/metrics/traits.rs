//! Capability traits for the OS-facing probes.
//!
//! Every OS query sits behind one of these small traits so the collector's
//! merge and ranking policy can be exercised with fake deterministic sources
//! (see the tests in [`collector`](crate::metrics::collector)). The
//! production implementations are the sysinfo-backed types in the per-probe
//! modules, one OS handle per probe.
//!
//! The CPU and process sources model a two-phase protocol explicitly:
//! baseline read (discarded) → wait → delta read (reported). The collector
//! owns the wait between the two calls, so a stale baseline can never leak
//! across collection calls.

use crate::error::Result;
use crate::metrics::data::{NetworkInterface, ProcessInfo};

/// Raw memory counter readings, before percentage derivation.
#[derive(Debug, Clone)]
pub struct MemoryCounters {
    /// Total physical memory in bytes
    pub total: u64,
    /// Available physical memory in bytes
    pub available: u64,
    /// Used physical memory in bytes
    pub used: u64,
    /// Total swap in bytes
    pub swap_total: u64,
    /// Used swap in bytes
    pub swap_used: u64,
}

/// One mounted partition as enumerated, before its usage query.
#[derive(Debug, Clone)]
pub struct PartitionEntry {
    /// Device path (e.g. "/dev/sda1")
    pub device: String,
    /// Mount point (e.g. "/")
    pub mountpoint: String,
    /// Filesystem type (e.g. "ext4")
    pub fstype: String,
}

/// Raw usage counters for one partition.
#[derive(Debug, Clone, Copy)]
pub struct PartitionUsage {
    /// Total space in bytes
    pub total: u64,
    /// Used space in bytes
    pub used: u64,
    /// Free space in bytes
    pub free: u64,
}

/// Source of per-core CPU utilization and core topology.
pub trait CpuSource {
    /// Take the baseline busy/idle reading. Whatever utilization the OS
    /// reports at this point is meaningless and is discarded.
    fn prime(&mut self) -> Result<()>;

    /// Per-logical-core busy percent accumulated since [`prime`].
    ///
    /// The length of the returned vector is the logical core count.
    ///
    /// [`prime`]: CpuSource::prime
    fn per_core_percent(&mut self) -> Result<Vec<f32>>;

    /// Physical core count, `None` when the OS cannot distinguish
    /// hyperthreads from physical cores.
    fn physical_cores(&mut self) -> Option<usize>;

    /// Current CPU frequency in MHz, `None` when the platform exposes no
    /// frequency counter.
    fn frequency_mhz(&mut self) -> Option<u64>;
}

/// Source of physical and swap memory counters.
pub trait MemorySource {
    /// Read the current memory counters in a single non-blocking query.
    fn counters(&mut self) -> Result<MemoryCounters>;
}

/// Source of mounted partitions and their usage.
pub trait DiskSource {
    /// Enumerate mounted, non-pseudo partitions at this instant.
    fn partitions(&mut self) -> Result<Vec<PartitionEntry>>;

    /// Usage counters for one enumerated partition.
    ///
    /// Errors when the partition became unreadable between enumeration and
    /// this query (permission denied, unmounted mid-scan); the collector
    /// drops such partitions and keeps going.
    fn usage(&mut self, entry: &PartitionEntry) -> Result<PartitionUsage>;
}

/// Source of cumulative per-interface network counters.
pub trait NetworkSource {
    /// Counters for every interface, in OS enumeration order. Counters the
    /// platform does not expose come back as zero, never omitted.
    fn interfaces(&mut self) -> Result<Vec<NetworkInterface>>;
}

/// Source of per-process samples.
pub trait ProcessSource {
    /// Phase 1: enumerate all visible processes and prime their per-process
    /// CPU accounting. The first reading only establishes a baseline.
    fn prime(&mut self) -> Result<()>;

    /// Phase 2: re-enumerate. CPU percents are now deltas since [`prime`].
    /// Processes that exited or became unreadable in between are simply
    /// absent from the result.
    ///
    /// [`prime`]: ProcessSource::prime
    fn processes(&mut self) -> Result<Vec<ProcessInfo>>;
}
