//! Main provisioning facade

use std::{net::Ipv4Addr, sync::Arc};

use secrecy::SecretString;

use crate::{
    backend::CommandRunner,
    config::Settings,
    core::{
        configurator::{Configurator, SupplicantConfig},
        discovery::DeviceDiscovery,
        error::{ProvisionError, ProvisionResult},
        remote::RemoteShell,
        scanner::NetworkScanner,
        types::WirelessNetwork,
    },
};

/// Main provisioning facade
///
/// Wires every step to one runner and one set of settings.
pub struct Provisioner<R: CommandRunner> {
    pub settings: Arc<Settings>,
    pub discovery: DeviceDiscovery<R>,
    pub scanner: NetworkScanner<R>,
    pub configurator: Configurator<R>,
}

impl<R: CommandRunner> Provisioner<R> {
    pub fn new(runner: Arc<R>, settings: Arc<Settings>) -> Self {
        let shell = Arc::new(RemoteShell::new(runner.clone(), settings.clone()));

        Self {
            discovery: DeviceDiscovery::new(runner, settings.clone()),
            scanner: NetworkScanner::new(shell.clone(), settings.clone()),
            configurator: Configurator::new(shell, settings.clone()),
            settings,
        }
    }

    /// Check that the SSH identity file is in place
    pub fn check_identity(&self) -> ProvisionResult<()> {
        let identity = &self.settings.identity_file;
        if identity.is_file() {
            Ok(())
        } else {
            Err(ProvisionError::MissingIdentity(identity.clone()))
        }
    }

    /// Locate the device on the local network
    pub async fn discover(&self) -> ProvisionResult<Ipv4Addr> {
        self.discovery.discover().await
    }

    /// Scan for networks visible to the device
    pub async fn scan(&self) -> ProvisionResult<Vec<WirelessNetwork>> {
        self.scanner.scan().await
    }

    /// Connect the device to `network`
    ///
    /// Uploads the configuration, then reconfigures the interface. Stops at the
    /// first step that fails.
    pub async fn connect(
        &self,
        network: &WirelessNetwork,
        psk: Option<SecretString>,
    ) -> ProvisionResult<()> {
        let config = SupplicantConfig::new(&self.settings, network, psk);

        self.configurator.upload(&config).await?;
        self.configurator.reconfigure().await
    }
}
