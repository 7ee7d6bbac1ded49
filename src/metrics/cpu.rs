//! sysinfo-backed CPU probe.

use sysinfo::System;

use crate::error::Result;
use crate::metrics::traits::CpuSource;

/// CPU probe reading per-core utilization through sysinfo.
///
/// sysinfo derives utilization from the delta between the two most recent
/// refreshes, which maps directly onto the prime/read protocol of
/// [`CpuSource`].
pub struct SysinfoCpuSource {
    system: System,
}

impl SysinfoCpuSource {
    /// Create a CPU probe with its own OS handle.
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoCpuSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuSource for SysinfoCpuSource {
    fn prime(&mut self) -> Result<()> {
        self.system.refresh_cpu_usage();
        Ok(())
    }

    fn per_core_percent(&mut self) -> Result<Vec<f32>> {
        self.system.refresh_cpu_usage();
        Ok(self
            .system
            .cpus()
            .iter()
            .map(|cpu| cpu.cpu_usage())
            .collect())
    }

    fn physical_cores(&mut self) -> Option<usize> {
        self.system.physical_core_count()
    }

    fn frequency_mhz(&mut self) -> Option<u64> {
        self.system.refresh_cpu_frequency();
        // sysinfo reports 0 MHz on platforms without a frequency counter;
        // map that to an explicit absence instead of a fabricated value.
        match self.system.cpus().first().map(|cpu| cpu.frequency()) {
            Some(0) | None => None,
            Some(mhz) => Some(mhz),
        }
    }
}
