//! Domain types for WiFi provisioning

/// Represents a discovered WiFi network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirelessNetwork {
    /// MAC address of the access point (BSSID)
    pub mac: String,
    /// Network name (ESSID)
    pub name: String,
    /// Whether the network requires a pre-shared key
    pub password_required: bool,
}

/// Captured result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a process that exited with status 0
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Output of a process that exited with the given non-zero status
    pub fn failed(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// A local program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// Placeholder logged instead of the command `ssh` runs on the device
pub const REDACTED_REMOTE_COMMAND: &str = "<remote command>";

impl Invocation {
    pub fn new(program: &str, args: &[String]) -> Self {
        Self {
            program: program.to_string(),
            args: args.to_vec(),
        }
    }

    /// Copy safe to log
    ///
    /// The last `ssh` argument is the remote command, which may carry a
    /// pre-shared key, so it is replaced.
    pub fn redacted(&self) -> Self {
        let mut args = self.args.clone();
        if self.program == "ssh" {
            if let Some(remote_cmd) = args.last_mut() {
                *remote_cmd = REDACTED_REMOTE_COMMAND.to_string();
            }
        }
        Self {
            program: self.program.clone(),
            args,
        }
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_success() {
        assert!(CommandOutput::ok("").success());
        assert!(!CommandOutput::failed(1, "boom").success());
        assert!(
            !CommandOutput {
                status: None,
                ..Default::default()
            }
            .success()
        );
    }

    #[test]
    fn test_invocation_display() {
        let invocation = Invocation {
            program: "ping".into(),
            args: vec!["-c".into(), "1".into(), "raspberrypi.local".into()],
        };
        assert_eq!(invocation.to_string(), "ping -c 1 raspberrypi.local");
    }

    #[test]
    fn test_invocation_redacts_remote_command() {
        let args = [
            "-i".to_string(),
            "rpi_id_rsa".to_string(),
            "pi@raspberrypi.local".to_string(),
            "echo -en 'psk=\"hunter22\"' | sudo -n tee /etc/x".to_string(),
        ];

        let redacted = Invocation::new("ssh", &args).redacted().to_string();

        assert_eq!(
            redacted,
            "ssh -i rpi_id_rsa pi@raspberrypi.local <remote command>"
        );
        assert!(!redacted.contains("hunter22"));
    }

    #[test]
    fn test_invocation_redaction_keeps_local_commands() {
        let args = ["-c".to_string(), "1".to_string(), "raspberrypi.local".to_string()];
        let invocation = Invocation::new("ping", &args);

        assert_eq!(invocation.redacted(), invocation);
    }
}
