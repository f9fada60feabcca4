//! Remote shell over `ssh`

use std::sync::Arc;

use tracing::debug;

use crate::{
    backend::CommandRunner,
    config::Settings,
    core::{error::CommandResult, types::CommandOutput},
};

const SSH_PROGRAM: &str = "ssh";

/// Runs shell commands on the device, one `ssh` process per command
pub struct RemoteShell<R: CommandRunner> {
    runner: Arc<R>,
    settings: Arc<Settings>,
}

impl<R: CommandRunner> RemoteShell<R> {
    pub fn new(runner: Arc<R>, settings: Arc<Settings>) -> Self {
        Self { runner, settings }
    }

    /// Arguments for `ssh` to run `remote_cmd` on the device
    pub fn command_args(&self, remote_cmd: &str) -> Vec<String> {
        vec![
            "-i".to_string(),
            self.settings.identity_file.display().to_string(),
            // Never fall back to an interactive password prompt
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            format!("{}@{}", self.settings.username, self.settings.hostname),
            remote_cmd.to_string(),
        ]
    }

    /// Run `remote_cmd` and wait for it to finish
    ///
    /// `label` names the operation in logs; the command itself is not logged
    /// since it may carry credentials.
    pub async fn run(&self, label: &str, remote_cmd: &str) -> CommandResult<CommandOutput> {
        debug!(
            label,
            host = %format!("{}@{}", self.settings.username, self.settings.hostname),
            "running remote command"
        );

        let output = self
            .runner
            .run(SSH_PROGRAM, &self.command_args(remote_cmd))
            .await?;

        debug!(label, status = ?output.status, "remote command finished");
        Ok(output)
    }
}

/// One-line reason for a failed remote command
pub fn describe_failure(status: Option<i32>, stderr: &str) -> String {
    let status = status.map_or_else(|| "killed by signal".to_string(), |code| {
        format!("exit status {}", code)
    });

    match stderr.lines().map(str::trim).find(|line| !line.is_empty()) {
        Some(line) => format!("{} ({})", line, status),
        None => status,
    }
}
