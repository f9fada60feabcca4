//! Runtime settings

use std::path::{Path, PathBuf};

use crate::config::CliArgs;

pub const DEFAULT_HOSTNAME: &str = "raspberrypi.local";
pub const DEFAULT_USERNAME: &str = "pi";
pub const DEFAULT_IDENTITY_FILE: &str = "rpi_id_rsa";
pub const DEFAULT_INTERFACE: &str = "wlan0";
pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_SUPPLICANT_CONF: &str = "/etc/wpa_supplicant/wpa_supplicant.conf";
pub const DEFAULT_CTRL_INTERFACE: &str = "DIR=/var/run/wpa_supplicant GROUP=netdev";
// wpa_cli is not on the PATH of a non-login ssh session
pub const DEFAULT_WPA_CLI: &str = "/sbin/wpa_cli";

/// Runtime configuration settings
///
/// Built once at startup and shared read-only by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// mDNS hostname of the device
    pub hostname: String,
    /// Remote user for SSH
    pub username: String,
    /// Private key passed to `ssh -i`
    pub identity_file: PathBuf,
    /// Wireless interface on the device
    pub interface: String,
    /// Regulatory domain written to the supplicant configuration
    pub country: String,
    pub supplicant_conf: String,
    pub ctrl_interface: String,
    pub wpa_cli: String,
    pub debug: bool,
}

impl Settings {
    /// Identity file shipped next to the executable
    pub fn default_identity_file() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .map(|dir| dir.join(DEFAULT_IDENTITY_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IDENTITY_FILE))
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "wifi_provisioner=debug"
        } else {
            "warn"
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hostname: DEFAULT_HOSTNAME.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            identity_file: Self::default_identity_file(),
            interface: DEFAULT_INTERFACE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            supplicant_conf: DEFAULT_SUPPLICANT_CONF.to_string(),
            ctrl_interface: DEFAULT_CTRL_INTERFACE.to_string(),
            wpa_cli: DEFAULT_WPA_CLI.to_string(),
            debug: false,
        }
    }
}

impl From<CliArgs> for Settings {
    fn from(args: CliArgs) -> Self {
        Settings {
            debug: args.debug,
            ..Default::default()
        }
    }
}
