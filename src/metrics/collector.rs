//! Core snapshot collection and process ranking.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use sysinfo::System;

use crate::error::Result;
use crate::metrics::{
    cpu::SysinfoCpuSource,
    data::*,
    disk::SysinfoDiskSource,
    memory::SysinfoMemorySource,
    network::SysinfoNetworkSource,
    process::SysinfoProcessSource,
    traits::{CpuSource, DiskSource, MemorySource, NetworkSource, ProcessSource},
};

/// One-shot system snapshot collector.
///
/// Owns one source per OS subsystem and applies the sampling policy on top
/// of them: the two blocking waits (CPU interval, process interval), the
/// partial-failure rules, and the process ranking. Construction is cheap;
/// all sampling happens in [`collect`](Self::collect) or the individual
/// `sample_*` methods.
pub struct SnapshotCollector {
    cpu: Box<dyn CpuSource>,
    memory: Box<dyn MemorySource>,
    disks: Box<dyn DiskSource>,
    network: Box<dyn NetworkSource>,
    processes: Box<dyn ProcessSource>,
    process_interval: Duration,
}

impl SnapshotCollector {
    /// Create a collector backed by the live OS probes.
    pub fn new() -> Self {
        Self {
            cpu: Box::new(SysinfoCpuSource::new()),
            memory: Box::new(SysinfoMemorySource::new()),
            disks: Box::new(SysinfoDiskSource::new()),
            network: Box::new(SysinfoNetworkSource::new()),
            processes: Box::new(SysinfoProcessSource::new()),
            process_interval: crate::DEFAULT_PROCESS_INTERVAL,
        }
    }

    /// Create a collector over explicit sources.
    ///
    /// This is the seam for substituting deterministic sources for the OS
    /// probes when exercising the collection policy.
    pub fn with_sources(
        cpu: impl CpuSource + 'static,
        memory: impl MemorySource + 'static,
        disks: impl DiskSource + 'static,
        network: impl NetworkSource + 'static,
        processes: impl ProcessSource + 'static,
    ) -> Self {
        Self {
            cpu: Box::new(cpu),
            memory: Box::new(memory),
            disks: Box::new(disks),
            network: Box::new(network),
            processes: Box::new(processes),
            process_interval: crate::DEFAULT_PROCESS_INTERVAL,
        }
    }

    /// Set the process-sampling interval.
    ///
    /// Deliberately independent of the CPU interval passed to
    /// [`collect`](Self::collect): a caller asking for a long CPU window
    /// should not also pay it a second time for the process table.
    pub fn with_process_interval(mut self, interval: Duration) -> Self {
        self.process_interval = interval;
        self
    }

    /// Sample per-core CPU utilization over `interval`.
    ///
    /// Blocks the calling thread for the full interval: baseline read,
    /// wait, delta read.
    pub fn sample_cpu(&mut self, interval: Duration) -> Result<CpuInfo> {
        self.cpu.prime()?;
        thread::sleep(interval);
        let per_core_percent = self.cpu.per_core_percent()?;

        let logical_cores = per_core_percent.len();
        let load_percent = if per_core_percent.is_empty() {
            0.0
        } else {
            per_core_percent.iter().sum::<f32>() / logical_cores as f32
        };
        // When the OS cannot tell hyperthreads apart, report the logical
        // count for both rather than guessing.
        let physical_cores = self.cpu.physical_cores().unwrap_or(logical_cores);

        Ok(CpuInfo {
            physical_cores,
            logical_cores,
            load_percent,
            per_core_percent,
            freq_current_mhz: self.cpu.frequency_mhz(),
        })
    }

    /// Sample physical and swap memory.
    ///
    /// The only probe whose failure is fatal for a whole collection.
    pub fn sample_memory(&mut self) -> Result<MemoryInfo> {
        let counters = self.memory.counters()?;
        Ok(MemoryInfo {
            total: counters.total,
            available: counters.available,
            used: counters.used,
            percent: percent_of(counters.used, counters.total),
            swap_total: counters.swap_total,
            swap_used: counters.swap_used,
            swap_percent: percent_of(counters.swap_used, counters.swap_total),
        })
    }

    /// Sample usage for every mounted, non-pseudo partition.
    ///
    /// A partition whose usage query fails after enumeration is dropped
    /// and collection continues with the rest.
    pub fn sample_disks(&mut self) -> Result<Vec<DiskPartitionUsage>> {
        let entries = self.disks.partitions()?;
        let mut disks = Vec::with_capacity(entries.len());
        for entry in entries {
            // Unreadable since enumeration (permissions, unmounted
            // mid-scan): skip it, keep the rest.
            let usage = match self.disks.usage(&entry) {
                Ok(usage) => usage,
                Err(_) => continue,
            };
            disks.push(DiskPartitionUsage {
                device: entry.device,
                mountpoint: entry.mountpoint,
                fstype: entry.fstype,
                total: usage.total,
                used: usage.used,
                free: usage.free,
                percent: percent_of(usage.used, usage.total),
            });
        }
        Ok(disks)
    }

    /// Sample cumulative counters for every network interface.
    pub fn sample_network(&mut self) -> Result<Vec<NetworkInterface>> {
        let mut interfaces = self.network.interfaces()?;
        // OS enumeration order is hash-map order; sort so repeated
        // snapshots list interfaces stably.
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interfaces)
    }

    /// Sample all processes over `interval` and keep the top `count` by
    /// `(cpu_percent, memory_percent)` descending.
    ///
    /// Two-phase: prime the per-process CPU accounting, sleep for
    /// `interval`, re-enumerate. Processes that exit in between are absent
    /// from the result, not an error. Processes tied on both keys keep
    /// enumeration order. `count == 0` short-circuits without sampling.
    pub fn top_processes(&mut self, interval: Duration, count: usize) -> Result<Vec<ProcessInfo>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        self.processes.prime()?;
        thread::sleep(interval);
        let mut processes = self.processes.processes()?;
        // total_cmp keeps the comparator total even on NaN percents, and
        // the stable sort preserves enumeration order on full ties.
        processes.sort_by(|a, b| {
            b.cpu_percent
                .total_cmp(&a.cpu_percent)
                .then(b.memory_percent.total_cmp(&a.memory_percent))
        });
        processes.truncate(count);
        Ok(processes)
    }

    /// Collect one complete snapshot.
    ///
    /// Probes run sequentially: CPU over `interval`, then memory, disks,
    /// network, and (when `include_processes`) the process ranking over the
    /// collector's own process interval. Only the memory probe's failure
    /// aborts the collection; a whole-probe CPU, disk, or network failure is
    /// logged at warn level and degrades to a zeroed or empty section.
    pub fn collect(
        &mut self,
        interval: Duration,
        top_n: usize,
        include_processes: bool,
    ) -> Result<Snapshot> {
        // Metadata first so the timestamp marks the snapshot start, not the
        // end of the sampling waits.
        let meta = snapshot_meta();
        tracing::debug!("Sampling CPU over {:?}", interval);

        let cpu = match self.sample_cpu(interval) {
            Ok(cpu) => cpu,
            Err(err) => {
                tracing::warn!("Failed to sample CPU, reporting zeroed counters: {}", err);
                CpuInfo::default()
            }
        };
        let memory = self.sample_memory()?;
        let disks = match self.sample_disks() {
            Ok(disks) => disks,
            Err(err) => {
                tracing::warn!("Failed to sample disks, reporting none: {}", err);
                Vec::new()
            }
        };
        let network = match self.sample_network() {
            Ok(network) => network,
            Err(err) => {
                tracing::warn!("Failed to sample network interfaces, reporting none: {}", err);
                Vec::new()
            }
        };
        let processes = if include_processes {
            tracing::debug!("Sampling processes over {:?}", self.process_interval);
            match self.top_processes(self.process_interval, top_n) {
                Ok(processes) => processes,
                Err(err) => {
                    tracing::warn!("Failed to sample processes, reporting none: {}", err);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Snapshot {
            meta,
            cpu,
            memory,
            disks,
            network,
            processes,
        })
    }
}

impl Default for SnapshotCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Capture platform identification and the snapshot start time.
fn snapshot_meta() -> SnapshotMeta {
    let system = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
    let release = System::kernel_version().unwrap_or_else(|| "unknown".to_string());
    let platform =
        System::long_os_version().unwrap_or_else(|| format!("{} {}", system, release));
    let machine = System::cpu_arch().unwrap_or_else(|| std::env::consts::ARCH.to_string());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    SnapshotMeta {
        platform,
        system,
        release,
        machine,
        collector_version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp,
    }
}

/// Percentage of `part` in `whole`, 0 when `whole` is zero.
fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64 * 100.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapshotError;
    use crate::metrics::traits::{MemoryCounters, PartitionEntry, PartitionUsage};

    const NO_WAIT: Duration = Duration::ZERO;

    struct FakeCpu {
        per_core: Vec<f32>,
        physical: Option<usize>,
        freq: Option<u64>,
        primed: bool,
    }

    impl FakeCpu {
        fn new(per_core: Vec<f32>) -> Self {
            Self {
                per_core,
                physical: None,
                freq: None,
                primed: false,
            }
        }
    }

    impl CpuSource for FakeCpu {
        fn prime(&mut self) -> Result<()> {
            self.primed = true;
            Ok(())
        }

        fn per_core_percent(&mut self) -> Result<Vec<f32>> {
            assert!(self.primed, "per-core read before prime");
            Ok(self.per_core.clone())
        }

        fn physical_cores(&mut self) -> Option<usize> {
            self.physical
        }

        fn frequency_mhz(&mut self) -> Option<u64> {
            self.freq
        }
    }

    struct FailingCpu;

    impl CpuSource for FailingCpu {
        fn prime(&mut self) -> Result<()> {
            Err(SnapshotError::probe_failed("cpu", "no counters"))
        }

        fn per_core_percent(&mut self) -> Result<Vec<f32>> {
            Err(SnapshotError::probe_failed("cpu", "no counters"))
        }

        fn physical_cores(&mut self) -> Option<usize> {
            None
        }

        fn frequency_mhz(&mut self) -> Option<u64> {
            None
        }
    }

    struct FakeMemory {
        counters: MemoryCounters,
    }

    impl MemorySource for FakeMemory {
        fn counters(&mut self) -> Result<MemoryCounters> {
            Ok(self.counters.clone())
        }
    }

    fn fake_memory() -> FakeMemory {
        FakeMemory {
            counters: MemoryCounters {
                total: 16_000_000_000,
                available: 12_000_000_000,
                used: 4_000_000_000,
                swap_total: 2_000_000_000,
                swap_used: 500_000_000,
            },
        }
    }

    struct FailingMemory;

    impl MemorySource for FailingMemory {
        fn counters(&mut self) -> Result<MemoryCounters> {
            Err(SnapshotError::memory_unavailable("simulated"))
        }
    }

    struct FakeDisks {
        entries: Vec<PartitionEntry>,
        failing_mountpoints: Vec<&'static str>,
    }

    impl DiskSource for FakeDisks {
        fn partitions(&mut self) -> Result<Vec<PartitionEntry>> {
            Ok(self.entries.clone())
        }

        fn usage(&mut self, entry: &PartitionEntry) -> Result<PartitionUsage> {
            if self.failing_mountpoints.contains(&entry.mountpoint.as_str()) {
                return Err(SnapshotError::probe_failed("disk", "permission denied"));
            }
            Ok(PartitionUsage {
                total: 1000,
                used: 250,
                free: 750,
            })
        }
    }

    fn partition(device: &str, mountpoint: &str) -> PartitionEntry {
        PartitionEntry {
            device: device.to_string(),
            mountpoint: mountpoint.to_string(),
            fstype: "ext4".to_string(),
        }
    }

    fn quiet_disks() -> FakeDisks {
        FakeDisks {
            entries: vec![partition("/dev/sda1", "/")],
            failing_mountpoints: Vec::new(),
        }
    }

    struct FakeNetwork {
        interfaces: Vec<NetworkInterface>,
    }

    impl NetworkSource for FakeNetwork {
        fn interfaces(&mut self) -> Result<Vec<NetworkInterface>> {
            Ok(self.interfaces.clone())
        }
    }

    fn interface(name: &str) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            bytes_sent: 10,
            bytes_recv: 20,
            packets_sent: 3,
            packets_recv: 4,
            errors_in: 0,
            errors_out: 0,
            drops_in: 0,
            drops_out: 0,
        }
    }

    fn quiet_network() -> FakeNetwork {
        FakeNetwork {
            interfaces: vec![interface("eth0")],
        }
    }

    struct FakeProcs {
        table: Vec<ProcessInfo>,
        primed: bool,
    }

    impl FakeProcs {
        fn new(table: Vec<ProcessInfo>) -> Self {
            Self {
                table,
                primed: false,
            }
        }
    }

    impl ProcessSource for FakeProcs {
        fn prime(&mut self) -> Result<()> {
            self.primed = true;
            Ok(())
        }

        fn processes(&mut self) -> Result<Vec<ProcessInfo>> {
            assert!(self.primed, "process read before prime");
            Ok(self.table.clone())
        }
    }

    /// Trips the test when any sampling happens at all.
    struct PanickingProcs;

    impl ProcessSource for PanickingProcs {
        fn prime(&mut self) -> Result<()> {
            panic!("prime must not be called");
        }

        fn processes(&mut self) -> Result<Vec<ProcessInfo>> {
            panic!("processes must not be called");
        }
    }

    fn proc(pid: u32, cpu_percent: f32, memory_percent: f32) -> ProcessInfo {
        ProcessInfo {
            pid,
            name: format!("proc-{}", pid),
            username: Some("tester".to_string()),
            cpu_percent,
            memory_percent,
            rss: 1024,
            vms: 4096,
            cmdline: vec![format!("/usr/bin/proc-{}", pid)],
        }
    }

    fn quiet_procs() -> FakeProcs {
        FakeProcs::new(vec![proc(1, 1.0, 1.0)])
    }

    fn collector(
        cpu: impl CpuSource + 'static,
        memory: impl MemorySource + 'static,
        disks: impl DiskSource + 'static,
        network: impl NetworkSource + 'static,
        processes: impl ProcessSource + 'static,
    ) -> SnapshotCollector {
        SnapshotCollector::with_sources(cpu, memory, disks, network, processes)
            .with_process_interval(NO_WAIT)
    }

    #[test]
    fn test_cpu_load_is_mean_of_per_core() {
        let mut c = collector(
            FakeCpu::new(vec![10.0, 20.0, 30.0, 40.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let cpu = c.sample_cpu(NO_WAIT).unwrap();
        assert_eq!(cpu.logical_cores, 4);
        assert!((cpu.load_percent - 25.0).abs() < f32::EPSILON);
        assert_eq!(cpu.per_core_percent.len(), 4);
    }

    #[test]
    fn test_cpu_physical_cores_fall_back_to_logical() {
        let mut c = collector(
            FakeCpu::new(vec![5.0, 5.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let cpu = c.sample_cpu(NO_WAIT).unwrap();
        assert_eq!(cpu.physical_cores, 2);
        assert_eq!(cpu.freq_current_mhz, None);
    }

    #[test]
    fn test_cpu_reports_physical_cores_and_frequency_when_known() {
        let mut fake = FakeCpu::new(vec![0.0, 0.0, 0.0, 0.0]);
        fake.physical = Some(2);
        fake.freq = Some(2400);
        let mut c = collector(
            fake,
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let cpu = c.sample_cpu(NO_WAIT).unwrap();
        assert_eq!(cpu.physical_cores, 2);
        assert_eq!(cpu.logical_cores, 4);
        assert_eq!(cpu.freq_current_mhz, Some(2400));
    }

    #[test]
    fn test_cpu_zero_cores_yields_zero_load() {
        let mut c = collector(
            FakeCpu::new(Vec::new()),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let cpu = c.sample_cpu(NO_WAIT).unwrap();
        assert_eq!(cpu.logical_cores, 0);
        assert_eq!(cpu.load_percent, 0.0);
    }

    #[test]
    fn test_memory_percent_is_derived_from_counters() {
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let memory = c.sample_memory().unwrap();
        assert!((memory.percent - 25.0).abs() < 0.01);
        assert!((memory.swap_percent - 25.0).abs() < 0.01);
        assert!(memory.used <= memory.total);
    }

    #[test]
    fn test_memory_zero_totals_yield_zero_percent() {
        let zeroed = FakeMemory {
            counters: MemoryCounters {
                total: 0,
                available: 0,
                used: 0,
                swap_total: 0,
                swap_used: 0,
            },
        };
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            zeroed,
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let memory = c.sample_memory().unwrap();
        assert_eq!(memory.percent, 0.0);
        assert_eq!(memory.swap_percent, 0.0);
    }

    #[test]
    fn test_memory_failure_aborts_collection() {
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            FailingMemory,
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let result = c.collect(NO_WAIT, 5, true);
        assert!(matches!(result, Err(SnapshotError::MemoryUnavailable(_))));
    }

    #[test]
    fn test_unreadable_partition_is_dropped_and_order_kept() {
        let disks = FakeDisks {
            entries: vec![
                partition("/dev/sda1", "/"),
                partition("/dev/sdb1", "/data"),
                partition("/dev/sdc1", "/backup"),
            ],
            failing_mountpoints: vec!["/data"],
        };
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            disks,
            quiet_network(),
            quiet_procs(),
        );
        let sampled = c.sample_disks().unwrap();
        let mountpoints: Vec<&str> = sampled.iter().map(|d| d.mountpoint.as_str()).collect();
        assert_eq!(mountpoints, vec!["/", "/backup"]);
        assert!((sampled[0].percent - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_collect_survives_partition_drop() {
        let disks = FakeDisks {
            entries: vec![
                partition("/dev/sda1", "/"),
                partition("/dev/sdb1", "/data"),
                partition("/dev/sdc1", "/backup"),
            ],
            failing_mountpoints: vec!["/data"],
        };
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            disks,
            quiet_network(),
            quiet_procs(),
        );
        let snapshot = c.collect(NO_WAIT, 5, true).unwrap();
        assert_eq!(snapshot.disks.len(), 2);
    }

    #[test]
    fn test_network_interfaces_are_sorted_by_name() {
        let network = FakeNetwork {
            interfaces: vec![interface("wlan0"), interface("eth0"), interface("docker0")],
        };
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            network,
            quiet_procs(),
        );
        let sampled = c.sample_network().unwrap();
        let names: Vec<&str> = sampled.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["docker0", "eth0", "wlan0"]);
    }

    #[test]
    fn test_processes_rank_by_cpu_then_memory() {
        let procs = FakeProcs::new(vec![
            proc(1, 10.0, 5.0),
            proc(2, 50.0, 1.0),
            proc(3, 10.0, 9.0),
            proc(4, 80.0, 0.5),
        ]);
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            procs,
        );
        let top = c.top_processes(NO_WAIT, 4).unwrap();
        let pids: Vec<u32> = top.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_process_ties_keep_enumeration_order() {
        let procs = FakeProcs::new(vec![
            proc(30, 10.0, 2.0),
            proc(10, 10.0, 2.0),
            proc(20, 10.0, 2.0),
        ]);
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            procs,
        );
        let top = c.top_processes(NO_WAIT, 3).unwrap();
        let pids: Vec<u32> = top.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![30, 10, 20]);
    }

    #[test]
    fn test_top_processes_truncates_to_count() {
        let procs = FakeProcs::new(vec![
            proc(1, 1.0, 1.0),
            proc(2, 2.0, 1.0),
            proc(3, 3.0, 1.0),
            proc(4, 4.0, 1.0),
            proc(5, 5.0, 1.0),
        ]);
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            procs,
        );
        let top = c.top_processes(NO_WAIT, 2).unwrap();
        let pids: Vec<u32> = top.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![5, 4]);
    }

    #[test]
    fn test_zero_count_skips_process_sampling() {
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            PanickingProcs,
        );
        let top = c.top_processes(NO_WAIT, 0).unwrap();
        assert!(top.is_empty());
    }

    #[test]
    fn test_collect_without_processes_skips_sampling() {
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            PanickingProcs,
        );
        let snapshot = c.collect(NO_WAIT, 5, false).unwrap();
        assert!(snapshot.processes.is_empty());
    }

    #[test]
    fn test_process_gone_between_phases_is_excluded() {
        // Phase 1 saw pids 1..=3; pid 2 exited before the phase-2 read, so
        // the source only reports the survivors.
        let procs = FakeProcs::new(vec![proc(1, 4.0, 1.0), proc(3, 2.0, 1.0)]);
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            procs,
        );
        let top = c.top_processes(NO_WAIT, 10).unwrap();
        let pids: Vec<u32> = top.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 3]);
    }

    #[test]
    fn test_cpu_failure_degrades_to_zeroed_info() {
        let mut c = collector(
            FailingCpu,
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let snapshot = c.collect(NO_WAIT, 5, true).unwrap();
        assert_eq!(snapshot.cpu.logical_cores, 0);
        assert_eq!(snapshot.cpu.load_percent, 0.0);
        assert!(snapshot.cpu.per_core_percent.is_empty());
        assert_eq!(snapshot.cpu.freq_current_mhz, None);
        // The rest of the snapshot is intact.
        assert_eq!(snapshot.disks.len(), 1);
        assert_eq!(snapshot.processes.len(), 1);
    }

    #[test]
    fn test_collect_captures_metadata() {
        let mut c = collector(
            FakeCpu::new(vec![0.0]),
            fake_memory(),
            quiet_disks(),
            quiet_network(),
            quiet_procs(),
        );
        let snapshot = c.collect(NO_WAIT, 5, true).unwrap();
        assert!(snapshot.meta.timestamp > 0);
        assert_eq!(snapshot.meta.collector_version, env!("CARGO_PKG_VERSION"));
        assert!(!snapshot.meta.machine.is_empty());
        assert!(!snapshot.meta.system.is_empty());
    }

    #[test]
    fn test_percent_of_guards_zero_totals() {
        assert_eq!(percent_of(10, 0), 0.0);
        assert!((percent_of(1, 4) - 25.0).abs() < f32::EPSILON);
        assert!((percent_of(999, 1000) - 99.9).abs() < 0.01);
    }
}
