//! Device discovery on the local network

use std::{net::Ipv4Addr, sync::Arc};

use regex::Regex;
use tracing::{debug, warn};

use crate::{
    backend::CommandRunner,
    config::Settings,
    core::error::{ProvisionError, ProvisionResult},
};

/// Extract the resolved address from `ping` output
///
/// Looks for the `PING <hostname> (<a.b.c.d>)` header that `ping` prints once
/// the name is resolved.
pub fn extract_address(hostname: &str, output: &str) -> Option<Ipv4Addr> {
    let pattern = format!(
        r"PING {} \((\d{{1,3}}\.\d{{1,3}}\.\d{{1,3}}\.\d{{1,3}})\)",
        regex::escape(hostname)
    );
    let re = Regex::new(&pattern).ok()?;

    re.captures(output)?.get(1)?.as_str().parse().ok()
}

/// Locates the device with a single ping
pub struct DeviceDiscovery<R: CommandRunner> {
    runner: Arc<R>,
    settings: Arc<Settings>,
}

impl<R: CommandRunner> DeviceDiscovery<R> {
    pub fn new(runner: Arc<R>, settings: Arc<Settings>) -> Self {
        Self { runner, settings }
    }

    /// Ping the device once and return its address
    pub async fn discover(&self) -> ProvisionResult<Ipv4Addr> {
        let hostname = &self.settings.hostname;
        let args = ["-c".to_string(), "1".to_string(), hostname.clone()];

        let output = self.runner.run("ping", &args).await.map_err(|e| {
            warn!("Device ping could not run: {}", e);
            ProvisionError::DeviceNotFound
        })?;

        if !output.success() {
            debug!(status = ?output.status, stderr = %output.stderr, "device ping failed");
            return Err(ProvisionError::DeviceNotFound);
        }

        let address = extract_address(hostname, &output.stdout).ok_or_else(|| {
            debug!(stdout = %output.stdout, "no address in ping output");
            ProvisionError::DeviceNotFound
        })?;

        debug!(%address, "found device");
        Ok(address)
    }
}
