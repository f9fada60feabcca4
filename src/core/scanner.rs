//! Remote WiFi scanning

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    backend::CommandRunner,
    config::Settings,
    core::{
        error::{ProvisionError, ProvisionResult},
        parser::parse_scan_output,
        remote::{RemoteShell, describe_failure},
        types::WirelessNetwork,
    },
};

/// Triggers a scan on the device and parses the result
pub struct NetworkScanner<R: CommandRunner> {
    shell: Arc<RemoteShell<R>>,
    settings: Arc<Settings>,
}

impl<R: CommandRunner> NetworkScanner<R> {
    pub fn new(shell: Arc<RemoteShell<R>>, settings: Arc<Settings>) -> Self {
        Self { shell, settings }
    }

    /// Remote command that lists visible access points
    pub fn scan_command(&self) -> String {
        format!("sudo -n iwlist {} scan", self.settings.interface)
    }

    /// Scan for networks visible to the device
    ///
    /// Fails if the scan does not exit cleanly or reports no usable network.
    pub async fn scan(&self) -> ProvisionResult<Vec<WirelessNetwork>> {
        let output = self
            .shell
            .run("scan", &self.scan_command())
            .await
            .map_err(|e| ProvisionError::ScanFailed(e.to_string()))?;

        if !output.success() {
            warn!(status = ?output.status, "Remote scan failed");
            return Err(ProvisionError::ScanFailed(describe_failure(
                output.status,
                &output.stderr,
            )));
        }

        let networks = parse_scan_output(&output.stdout);
        debug!(count = networks.len(), ?networks, "scan complete");

        if networks.is_empty() {
            return Err(ProvisionError::ScanFailed("no networks found".to_string()));
        }

        Ok(networks)
    }
}
