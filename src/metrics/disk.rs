//! sysinfo-backed disk probe.

use std::path::Path;

use sysinfo::Disks;

use crate::error::{Result, SnapshotError};
use crate::metrics::traits::{DiskSource, PartitionEntry, PartitionUsage};

/// Filesystem types treated as pseudo and excluded from enumeration.
///
/// sysinfo already hides most virtual mounts; this list keeps the contract
/// explicit for platforms where they leak through.
const PSEUDO_FILESYSTEMS: &[&str] = &[
    "proc", "sysfs", "devtmpfs", "devfs", "tmpfs", "overlay", "squashfs", "autofs",
];

/// Disk probe enumerating mounted partitions through sysinfo.
pub struct SysinfoDiskSource {
    disks: Disks,
}

impl SysinfoDiskSource {
    /// Create a disk probe with its own OS handle.
    pub fn new() -> Self {
        Self {
            disks: Disks::new(),
        }
    }
}

impl Default for SysinfoDiskSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DiskSource for SysinfoDiskSource {
    fn partitions(&mut self) -> Result<Vec<PartitionEntry>> {
        // Fresh enumeration on every call; mount-table order is preserved.
        self.disks.refresh_list();
        Ok(self
            .disks
            .iter()
            .filter(|disk| {
                let fstype = disk.file_system().to_string_lossy();
                !PSEUDO_FILESYSTEMS.contains(&fstype.as_ref())
            })
            .map(|disk| PartitionEntry {
                device: disk.name().to_string_lossy().to_string(),
                mountpoint: disk.mount_point().to_string_lossy().to_string(),
                fstype: disk.file_system().to_string_lossy().to_string(),
            })
            .collect())
    }

    fn usage(&mut self, entry: &PartitionEntry) -> Result<PartitionUsage> {
        let mountpoint = Path::new(&entry.mountpoint);
        let disk = self
            .disks
            .iter()
            .find(|disk| disk.mount_point() == mountpoint)
            .ok_or_else(|| {
                SnapshotError::probe_failed(
                    "disk",
                    format!("partition {} disappeared during scan", entry.mountpoint),
                )
            })?;

        let total = disk.total_space();
        if total == 0 {
            // Zero-sized totals come from mounts the OS would not let us
            // stat; treat them as an unreadable partition.
            return Err(SnapshotError::probe_failed(
                "disk",
                format!("partition {} is not readable", entry.mountpoint),
            ));
        }
        let free = disk.available_space();
        Ok(PartitionUsage {
            total,
            used: total.saturating_sub(free),
            free,
        })
    }
}
