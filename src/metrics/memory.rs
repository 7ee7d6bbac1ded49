//! sysinfo-backed memory probe.

use sysinfo::System;

use crate::error::{Result, SnapshotError};
use crate::metrics::traits::{MemoryCounters, MemorySource};

/// Memory probe reading physical and swap counters through sysinfo.
pub struct SysinfoMemorySource {
    system: System,
}

impl SysinfoMemorySource {
    /// Create a memory probe with its own OS handle.
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource for SysinfoMemorySource {
    fn counters(&mut self) -> Result<MemoryCounters> {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        // A zero total means the refresh produced nothing usable; memory
        // info is assumed always available, so this surfaces as fatal.
        if total == 0 {
            return Err(SnapshotError::memory_unavailable(
                "OS reported zero total memory",
            ));
        }
        Ok(MemoryCounters {
            total,
            available: self.system.available_memory(),
            used: self.system.used_memory(),
            swap_total: self.system.total_swap(),
            swap_used: self.system.used_swap(),
        })
    }
}
