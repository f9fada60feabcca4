//! Error types for the WiFi provisioner

use std::path::PathBuf;

use thiserror::Error;

/// Result type for local process execution
pub type CommandResult<T> = Result<T, CommandError>;

/// Result type for provisioning operations
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors raised while running a local program
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that end a provisioning run
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("SSH identity file not found: {}", .0.display())]
    MissingIdentity(PathBuf),

    #[error(
        "Could not find the device: ensure that it is connected to your computer and Internet sharing is enabled"
    )]
    DeviceNotFound,

    #[error("Could not scan for WiFi networks: {0}")]
    ScanFailed(String),

    #[error("Could not connect the device to the network: upload failed: {0}")]
    UploadFailed(String),

    #[error("Could not connect the device to the network: reconfigure failed: {0}")]
    ReconfigureFailed(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_not_found_is_single_line() {
        let message = ProvisionError::DeviceNotFound.to_string();
        assert!(!message.contains('\n'));
        assert!(message.starts_with("Could not find the device"));
    }

    #[test]
    fn test_missing_identity_names_path() {
        let err = ProvisionError::MissingIdentity(PathBuf::from("/opt/tool/rpi_id_rsa"));
        assert_eq!(
            err.to_string(),
            "SSH identity file not found: /opt/tool/rpi_id_rsa"
        );
    }
}
