//! Supplicant configuration upload and interface reconfiguration

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use crate::{
    backend::CommandRunner,
    config::Settings,
    core::{
        error::{ProvisionError, ProvisionResult},
        remote::{RemoteShell, describe_failure},
        types::WirelessNetwork,
    },
};

/// Reply printed by `wpa_cli` when a request succeeded
const WPA_CLI_OK: &str = "OK";

/// Contents of `wpa_supplicant.conf` with a single network block
#[derive(Debug)]
pub struct SupplicantConfig {
    pub ctrl_interface: String,
    pub country: String,
    pub ssid: String,
    /// Passphrase, `None` for open networks
    pub psk: Option<SecretString>,
}

impl SupplicantConfig {
    pub fn new(settings: &Settings, network: &WirelessNetwork, psk: Option<SecretString>) -> Self {
        Self {
            ctrl_interface: settings.ctrl_interface.clone(),
            country: settings.country.clone(),
            ssid: network.name.clone(),
            psk,
        }
    }

    /// Render the file contents
    ///
    /// The result contains the passphrase in plain text.
    pub fn render(&self) -> String {
        let key_entry = match &self.psk {
            Some(psk) => format!("psk=\"{}\"", psk.expose_secret()),
            None => "key_mgmt=NONE".to_string(),
        };

        format!(
            "ctrl_interface={}\n\
             update_config=1\n\
             country={}\n\
             network={{\n    \
             ssid=\"{}\"\n    \
             {}\n\
             }}\n",
            self.ctrl_interface, self.country, self.ssid, key_entry
        )
    }
}

/// Encode `payload` as the body of a single-quoted `echo -en` argument
///
/// Newlines and tabs become `\n` and `\t` escapes so the payload stays on one
/// line; backslashes are doubled so `echo -e` writes them back verbatim, and
/// single quotes close and reopen the quoting.
pub fn escape_for_echo(payload: &str) -> String {
    let mut escaped = String::with_capacity(payload.len());
    for c in payload.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\'' => escaped.push_str("'\\''"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Writes the supplicant configuration and applies it on the device
pub struct Configurator<R: CommandRunner> {
    shell: Arc<RemoteShell<R>>,
    settings: Arc<Settings>,
}

impl<R: CommandRunner> Configurator<R> {
    pub fn new(shell: Arc<RemoteShell<R>>, settings: Arc<Settings>) -> Self {
        Self { shell, settings }
    }

    /// Remote command that overwrites the configuration file
    pub fn upload_command(&self, config: &SupplicantConfig) -> String {
        format!(
            "echo -en '{}' | sudo -n tee {} > /dev/null",
            escape_for_echo(&config.render()),
            self.settings.supplicant_conf
        )
    }

    /// Remote command that makes wpa_supplicant reload its configuration
    pub fn reconfigure_command(&self) -> String {
        format!(
            "{} -i {} reconfigure",
            self.settings.wpa_cli, self.settings.interface
        )
    }

    /// Overwrite the configuration file on the device
    pub async fn upload(&self, config: &SupplicantConfig) -> ProvisionResult<()> {
        let output = self
            .shell
            .run("upload", &self.upload_command(config))
            .await
            .map_err(|e| ProvisionError::UploadFailed(e.to_string()))?;

        if !output.success() {
            warn!(status = ?output.status, "Configuration upload failed");
            return Err(ProvisionError::UploadFailed(describe_failure(
                output.status,
                &output.stderr,
            )));
        }

        info!(ssid = %config.ssid, path = %self.settings.supplicant_conf, "configuration uploaded");
        Ok(())
    }

    /// Reconfigure the wireless interface
    ///
    /// `wpa_cli` exits with 0 even when the request fails, so the reply on
    /// stdout must be exactly `OK`.
    pub async fn reconfigure(&self) -> ProvisionResult<()> {
        let output = self
            .shell
            .run("reconfigure", &self.reconfigure_command())
            .await
            .map_err(|e| ProvisionError::ReconfigureFailed(e.to_string()))?;

        if !output.success() {
            warn!(status = ?output.status, "Reconfigure failed");
            return Err(ProvisionError::ReconfigureFailed(describe_failure(
                output.status,
                &output.stderr,
            )));
        }

        let reply = output.stdout.trim();
        debug!(reply, "wpa_cli reply");
        if reply != WPA_CLI_OK {
            return Err(ProvisionError::ReconfigureFailed(format!(
                "wpa_cli replied {:?}",
                reply
            )));
        }

        info!(interface = %self.settings.interface, "interface reconfigured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockCommandRunner;
    use crate::core::types::CommandOutput;
    use pretty_assertions::assert_eq;

    fn network(name: &str, password_required: bool) -> WirelessNetwork {
        WirelessNetwork {
            mac: "00:11:22:33:44:55".into(),
            name: name.into(),
            password_required,
        }
    }

    fn configurator(runner: &Arc<MockCommandRunner>) -> Configurator<MockCommandRunner> {
        let settings = Arc::new(Settings::default());
        let shell = Arc::new(RemoteShell::new(runner.clone(), settings.clone()));
        Configurator::new(shell, settings)
    }

    fn secret(value: &str) -> Option<SecretString> {
        Some(SecretString::new(value.to_string()))
    }

    #[test]
    fn test_render_with_psk() {
        let config = SupplicantConfig::new(
            &Settings::default(),
            &network("HomeNet", true),
            secret("hunter22"),
        );

        assert_eq!(
            config.render(),
            "ctrl_interface=DIR=/var/run/wpa_supplicant GROUP=netdev\n\
             update_config=1\n\
             country=US\n\
             network={\n    \
             ssid=\"HomeNet\"\n    \
             psk=\"hunter22\"\n\
             }\n"
        );
    }

    #[test]
    fn test_render_open_network() {
        let config = SupplicantConfig::new(&Settings::default(), &network("Guest", false), None);

        let rendered = config.render();

        assert!(rendered.contains("    ssid=\"Guest\"\n    key_mgmt=NONE\n"));
        assert!(!rendered.contains("psk="));
    }

    #[test]
    fn test_debug_does_not_leak_psk() {
        let config = SupplicantConfig::new(
            &Settings::default(),
            &network("HomeNet", true),
            secret("hunter22"),
        );

        assert!(!format!("{:?}", config).contains("hunter22"));
    }

    #[test]
    fn test_escape_for_echo() {
        assert_eq!(escape_for_echo("a\nb\tc"), "a\\nb\\tc");
        assert_eq!(escape_for_echo("back\\slash"), "back\\\\slash");
        assert_eq!(escape_for_echo("it's"), "it'\\''s");
        assert_eq!(escape_for_echo("plain"), "plain");
    }

    #[test]
    fn test_upload_command_is_single_line() {
        let runner = Arc::new(MockCommandRunner::new());
        let config = SupplicantConfig::new(
            &Settings::default(),
            &network("HomeNet", true),
            secret("pass\tword's"),
        );

        let command = configurator(&runner).upload_command(&config);

        assert!(!command.contains('\n'));
        assert!(!command.contains('\t'));
        assert!(command.starts_with("echo -en 'ctrl_interface=DIR=/var/run/wpa_supplicant"));
        assert!(command.contains("psk=\"pass\\tword'\\''s\""));
        assert!(command.ends_with(
            "' | sudo -n tee /etc/wpa_supplicant/wpa_supplicant.conf > /dev/null"
        ));
    }

    #[tokio::test]
    async fn test_upload_success() {
        let runner = Arc::new(MockCommandRunner::new());
        runner.push_output(CommandOutput::ok("")).await;
        let config = SupplicantConfig::new(&Settings::default(), &network("Guest", false), None);

        configurator(&runner).upload(&config).await.unwrap();

        assert_eq!(runner.invocations().await.len(), 1);
    }

    #[tokio::test]
    async fn test_upload_failure() {
        let runner = Arc::new(MockCommandRunner::new());
        runner
            .push_output(CommandOutput::failed(1, "tee: Permission denied"))
            .await;
        let config = SupplicantConfig::new(&Settings::default(), &network("Guest", false), None);

        let result = configurator(&runner).upload(&config).await;

        assert!(matches!(result, Err(ProvisionError::UploadFailed(_))));
    }

    #[tokio::test]
    async fn test_reconfigure_command() {
        let runner = Arc::new(MockCommandRunner::new());
        runner.push_output(CommandOutput::ok("OK\n")).await;

        configurator(&runner).reconfigure().await.unwrap();

        let invocations = runner.invocations().await;
        assert_eq!(
            invocations[0].args.last().unwrap(),
            "/sbin/wpa_cli -i wlan0 reconfigure"
        );
    }

    #[tokio::test]
    async fn test_reconfigure_rejects_fail_reply() {
        let runner = Arc::new(MockCommandRunner::new());
        runner.push_output(CommandOutput::ok("FAIL\n")).await;

        let result = configurator(&runner).reconfigure().await;

        assert!(matches!(result, Err(ProvisionError::ReconfigureFailed(_))));
    }

    #[tokio::test]
    async fn test_reconfigure_rejects_extra_content() {
        let runner = Arc::new(MockCommandRunner::new());
        runner
            .push_output(CommandOutput::ok("OK\n\nSelected interface 'wlan0'\n"))
            .await;

        let result = configurator(&runner).reconfigure().await;

        assert!(matches!(result, Err(ProvisionError::ReconfigureFailed(_))));
    }

    #[tokio::test]
    async fn test_reconfigure_nonzero_status() {
        let runner = Arc::new(MockCommandRunner::new());
        runner
            .push_output(CommandOutput {
                status: Some(255),
                stdout: "OK\n".into(),
                stderr: String::new(),
            })
            .await;

        let result = configurator(&runner).reconfigure().await;

        assert!(matches!(result, Err(ProvisionError::ReconfigureFailed(_))));
    }
}
