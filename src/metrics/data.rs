//! Data structures for system metric snapshots.

use serde::{Deserialize, Serialize};

/// A complete snapshot of system metrics at a point in time.
///
/// Produced atomically by one collection call and never mutated afterwards.
/// Consumers must treat every field as read-only and must not assume the
/// presence of optional values beyond what the field types state
/// (`freq_current_mhz` and `username` may be absent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Platform identification and collection timestamp
    pub meta: SnapshotMeta,
    /// CPU core counts and utilization
    pub cpu: CpuInfo,
    /// Physical and swap memory usage
    pub memory: MemoryInfo,
    /// Usage per mounted, non-pseudo partition
    pub disks: Vec<DiskPartitionUsage>,
    /// Cumulative counters per network interface, sorted by name
    pub network: Vec<NetworkInterface>,
    /// Top resource-consuming processes, sorted by (cpu, memory) descending;
    /// empty when process collection was skipped
    pub processes: Vec<ProcessInfo>,
}

/// Platform identification and timing metadata for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMeta {
    /// Full platform description (e.g. "Linux 6.8.0 Ubuntu 24.04")
    pub platform: String,
    /// Operating system family or distribution name (e.g. "Ubuntu")
    pub system: String,
    /// OS release, the kernel version where the platform reports one
    pub release: String,
    /// Machine architecture (e.g. "x86_64", "aarch64")
    pub machine: String,
    /// Version of this collector crate
    pub collector_version: String,
    /// Unix timestamp in seconds, taken at snapshot start
    pub timestamp: u64,
}

/// CPU information and per-core utilization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Physical core count; equals `logical_cores` when the OS cannot
    /// distinguish hyperthreads
    pub physical_cores: usize,
    /// Logical core count
    pub logical_cores: usize,
    /// Overall load percent (0.0 to 100.0), the mean of `per_core_percent`
    pub load_percent: f32,
    /// Utilization per logical core, in core order
    pub per_core_percent: Vec<f32>,
    /// Current frequency in MHz, `None` when the platform exposes no
    /// frequency counter
    pub freq_current_mhz: Option<u64>,
}

/// Physical and swap memory usage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryInfo {
    /// Total system memory in bytes
    pub total: u64,
    /// Memory available to new allocations in bytes
    pub available: u64,
    /// Used memory in bytes
    pub used: u64,
    /// Used memory as a percentage of total (0.0 to 100.0)
    pub percent: f32,
    /// Total swap space in bytes
    pub swap_total: u64,
    /// Used swap space in bytes
    pub swap_used: u64,
    /// Used swap as a percentage of total swap (0.0 to 100.0)
    pub swap_percent: f32,
}

/// Usage of a single mounted partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskPartitionUsage {
    /// Device path (e.g. "/dev/sda1")
    pub device: String,
    /// Mount point (e.g. "/", "/home")
    pub mountpoint: String,
    /// Filesystem type (e.g. "ext4", "apfs")
    pub fstype: String,
    /// Total space in bytes
    pub total: u64,
    /// Used space in bytes
    pub used: u64,
    /// Free space in bytes; `used + free` may be less than `total` because
    /// of filesystem-reserved blocks
    pub free: u64,
    /// Used space as a percentage of total (0.0 to 100.0)
    pub percent: f32,
}

/// Cumulative traffic counters for one network interface.
///
/// Counters are monotonic non-negative integers owned by the OS since its
/// last counter reset; the collector only reads them. Counters the platform
/// does not expose are zero rather than absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInterface {
    /// Interface name, unique per snapshot (e.g. "eth0", "wlan0")
    pub name: String,
    /// Bytes transmitted
    pub bytes_sent: u64,
    /// Bytes received
    pub bytes_recv: u64,
    /// Packets transmitted
    pub packets_sent: u64,
    /// Packets received
    pub packets_recv: u64,
    /// Receive errors
    pub errors_in: u64,
    /// Transmit errors
    pub errors_out: u64,
    /// Incoming packets dropped
    pub drops_in: u64,
    /// Outgoing packets dropped
    pub drops_out: u64,
}

/// One sampled process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process id; unique at sample time, may be reused by the OS over time
    pub pid: u32,
    /// Process name
    pub name: String,
    /// Owning username, `None` when the owner cannot be resolved
    /// (e.g. insufficient privilege)
    pub username: Option<String>,
    /// CPU percent over the sampling interval; may exceed 100 on
    /// multi-core machines
    pub cpu_percent: f32,
    /// Resident set size as a percentage of total memory
    pub memory_percent: f32,
    /// Resident set size in bytes
    pub rss: u64,
    /// Virtual memory size in bytes
    pub vms: u64,
    /// Full command line, one argument per element
    pub cmdline: Vec<String>,
}
