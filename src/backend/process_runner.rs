//! Child process backend implementation

use tokio::process::Command;
use tracing::debug;

use crate::{
    backend::CommandRunner,
    core::{
        error::{CommandError, CommandResult},
        types::{CommandOutput, Invocation},
    },
};

/// Runs programs as child processes of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> CommandResult<CommandOutput> {
        debug!(command = %Invocation::new(program, args).redacted(), "running");

        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let output = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(program, status = ?output.status, "process exited");
        debug!(stdout = %output.stdout, stderr = %output.stderr, "process output");

        Ok(output)
    }
}
