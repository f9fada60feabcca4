//! Process execution abstraction layer

pub mod command_runner;
pub mod mock_runner;
pub mod process_runner;

pub use command_runner::CommandRunner;
pub use process_runner::ProcessRunner;

#[cfg(test)]
pub use mock_runner::MockCommandRunner;
