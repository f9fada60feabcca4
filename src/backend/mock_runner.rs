//! Mock command runner for testing

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::backend::CommandRunner;
use crate::core::error::{CommandError, CommandResult};
use crate::core::types::{CommandOutput, Invocation};

/// Scripted answer for one invocation
#[derive(Debug)]
enum MockReply {
    Output(CommandOutput),
    SpawnFailure,
}

/// Internal state for the mock runner
#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<MockReply>,
    invocations: Vec<Invocation>,
}

/// Mock command runner for testing
///
/// Replies are handed out in the order they were queued. An invocation with no
/// queued reply fails as if the program could not be started.
#[derive(Debug, Clone, Default)]
pub struct MockCommandRunner {
    inner: Arc<Mutex<MockState>>,
}

impl MockCommandRunner {
    /// Create a new mock runner with no queued replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the output for the next invocation
    pub async fn push_output(&self, output: CommandOutput) {
        self.inner
            .lock()
            .await
            .replies
            .push_back(MockReply::Output(output));
    }

    /// Queue a spawn failure for the next invocation
    pub async fn push_spawn_failure(&self) {
        self.inner
            .lock()
            .await
            .replies
            .push_back(MockReply::SpawnFailure);
    }

    /// Every invocation seen so far, oldest first
    pub async fn invocations(&self) -> Vec<Invocation> {
        self.inner.lock().await.invocations.clone()
    }
}

impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> CommandResult<CommandOutput> {
        let mut state = self.inner.lock().await;
        state.invocations.push(Invocation::new(program, args));

        match state.replies.pop_front() {
            Some(MockReply::Output(output)) => Ok(output),
            Some(MockReply::SpawnFailure) | None => Err(CommandError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock spawn failure"),
            }),
        }
    }
}
