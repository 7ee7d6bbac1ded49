//! sysinfo-backed process table probe.

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};

use crate::error::Result;
use crate::metrics::data::ProcessInfo;
use crate::metrics::traits::ProcessSource;

/// Process probe enumerating the full process table.
///
/// CPU percentages follow the two-phase protocol: [`ProcessSource::prime`]
/// records a baseline and the next [`ProcessSource::processes`] call reads
/// usage accumulated since then. Reading without priming yields zeros.
pub struct SysinfoProcessSource {
    system: System,
    users: Users,
}

impl SysinfoProcessSource {
    /// Create a process probe with its own OS handle.
    pub fn new() -> Self {
        Self {
            system: System::new(),
            users: Users::new_with_refreshed_list(),
        }
    }

    fn refresh_kind() -> ProcessRefreshKind {
        ProcessRefreshKind::new()
            .with_cpu()
            .with_memory()
            .with_cmd(UpdateKind::OnlyIfNotSet)
            .with_user(UpdateKind::OnlyIfNotSet)
    }
}

impl Default for SysinfoProcessSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSource for SysinfoProcessSource {
    fn prime(&mut self) -> Result<()> {
        self.system
            .refresh_processes_specifics(ProcessesToUpdate::All, Self::refresh_kind());
        Ok(())
    }

    fn processes(&mut self) -> Result<Vec<ProcessInfo>> {
        // Refreshing with `All` drops processes that exited since the prime,
        // so the table never carries stale entries.
        self.system
            .refresh_processes_specifics(ProcessesToUpdate::All, Self::refresh_kind());
        self.system.refresh_memory();
        let total_memory = self.system.total_memory();

        Ok(self
            .system
            .processes()
            .values()
            .map(|process| {
                let rss = process.memory();
                let memory_percent = if total_memory == 0 {
                    0.0
                } else {
                    (rss as f64 / total_memory as f64 * 100.0) as f32
                };
                let username = process
                    .user_id()
                    .and_then(|uid| self.users.get_user_by_id(uid))
                    .map(|user| user.name().to_string());
                ProcessInfo {
                    pid: process.pid().as_u32(),
                    name: process.name().to_string_lossy().to_string(),
                    username,
                    cpu_percent: process.cpu_usage(),
                    memory_percent,
                    rss,
                    vms: process.virtual_memory(),
                    cmdline: process
                        .cmd()
                        .iter()
                        .map(|arg| arg.to_string_lossy().to_string())
                        .collect(),
                }
            })
            .collect())
    }
}
