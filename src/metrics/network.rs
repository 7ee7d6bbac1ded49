//! sysinfo-backed network interface probe.

use sysinfo::Networks;

use crate::error::Result;
use crate::metrics::data::NetworkInterface;
use crate::metrics::traits::NetworkSource;

/// Network probe reading cumulative per-interface counters.
pub struct SysinfoNetworkSource {
    networks: Networks,
}

impl SysinfoNetworkSource {
    /// Create a network probe with its own OS handle.
    pub fn new() -> Self {
        Self {
            networks: Networks::new(),
        }
    }
}

impl Default for SysinfoNetworkSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkSource for SysinfoNetworkSource {
    fn interfaces(&mut self) -> Result<Vec<NetworkInterface>> {
        self.networks.refresh_list();
        Ok(self
            .networks
            .iter()
            .map(|(name, data)| NetworkInterface {
                name: name.clone(),
                bytes_sent: data.total_transmitted(),
                bytes_recv: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
                errors_in: data.total_errors_on_received(),
                errors_out: data.total_errors_on_transmitted(),
                // sysinfo exposes no drop counters.
                drops_in: 0,
                drops_out: 0,
            })
            .collect())
    }
}
