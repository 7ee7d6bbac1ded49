//! HTML report rendering.
//!
//! Renders a [`Snapshot`] into a self-contained HTML document by token
//! substitution over a template embedded at compile time. One static report
//! does not justify a templating engine.

use chrono::DateTime;

use crate::metrics::data::{DiskPartitionUsage, NetworkInterface, ProcessInfo, Snapshot};

const TEMPLATE: &str = include_str!("../templates/report.html");

/// Render a snapshot as a self-contained HTML document.
///
/// Every OS-supplied string (device names, mountpoints, interface names,
/// process names, usernames) is HTML-escaped before substitution.
pub fn render_html(snapshot: &Snapshot) -> String {
    let cpu = &snapshot.cpu;
    let memory = &snapshot.memory;

    let per_core = cpu
        .per_core_percent
        .iter()
        .map(|v| format!("{:.1}%", v))
        .collect::<Vec<_>>()
        .join(", ");
    let freq = match cpu.freq_current_mhz {
        Some(mhz) => format!("{} MHz", mhz),
        None => "n/a".to_string(),
    };

    TEMPLATE
        .replace("{{TITLE}}", "System Health Report")
        .replace("{{DATETIME}}", &format_timestamp(snapshot.meta.timestamp))
        .replace("{{PLATFORM}}", &escape_html(&snapshot.meta.platform))
        .replace("{{SYSTEM}}", &escape_html(&snapshot.meta.system))
        .replace("{{RELEASE}}", &escape_html(&snapshot.meta.release))
        .replace("{{MACHINE}}", &escape_html(&snapshot.meta.machine))
        .replace(
            "{{VERSION}}",
            &escape_html(&snapshot.meta.collector_version),
        )
        .replace("{{CPU_LOAD}}", &format!("{:.1}%", cpu.load_percent))
        .replace(
            "{{CPU_CORES}}",
            &format!(
                "{} phys / {} logical",
                cpu.physical_cores, cpu.logical_cores
            ),
        )
        .replace("{{CPU_FREQ}}", &freq)
        .replace("{{CPU_PER_CORE}}", &per_core)
        .replace("{{MEM_USED}}", &format!("{:.1}%", memory.percent))
        .replace("{{MEM_TOTAL}}", &format_bytes(memory.total))
        .replace("{{MEM_AVAILABLE}}", &format_bytes(memory.available))
        .replace(
            "{{SWAP_USED}}",
            &format!(
                "{} / {}",
                format_bytes(memory.swap_used),
                format_bytes(memory.swap_total)
            ),
        )
        .replace("{{DISKS_ROWS}}", &disk_rows(&snapshot.disks))
        .replace("{{NICS_ROWS}}", &nic_rows(&snapshot.network))
        .replace("{{PROCS_ROWS}}", &process_rows(&snapshot.processes))
}

/// Format a Unix timestamp as a UTC datetime string.
fn format_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Escape the characters HTML treats specially.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Format a byte count with binary-unit suffixes.
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;
    const PB: u64 = TB * 1024;

    if bytes >= PB {
        format!("{:.1} PB", bytes as f64 / PB as f64)
    } else if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn disk_rows(disks: &[DiskPartitionUsage]) -> String {
    if disks.is_empty() {
        return "<tr><td colspan=\"7\">No disks</td></tr>".to_string();
    }
    disks
        .iter()
        .map(|d| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}%</td></tr>",
                escape_html(&d.device),
                escape_html(&d.mountpoint),
                escape_html(&d.fstype),
                format_bytes(d.total),
                format_bytes(d.used),
                format_bytes(d.free),
                d.percent,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn nic_rows(interfaces: &[NetworkInterface]) -> String {
    if interfaces.is_empty() {
        return "<tr><td colspan=\"5\">No network interfaces</td></tr>".to_string();
    }
    interfaces
        .iter()
        .map(|n| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&n.name),
                n.bytes_sent,
                n.bytes_recv,
                n.packets_sent,
                n.packets_recv,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn process_rows(processes: &[ProcessInfo]) -> String {
    if processes.is_empty() {
        return "<tr><td colspan=\"6\">Process list disabled</td></tr>".to_string();
    }
    processes
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}%</td><td>{:.1}%</td><td>{}</td></tr>",
                p.pid,
                escape_html(&p.name),
                escape_html(p.username.as_deref().unwrap_or("")),
                p.cpu_percent,
                p.memory_percent,
                format_bytes(p.rss),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
