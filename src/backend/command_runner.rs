//! Command runner trait definition

use trait_variant::make;

use crate::core::error::CommandResult;
use crate::core::types::CommandOutput;

/// Abstraction over local process execution
///
/// Every step of a provisioning run (`ping`, `ssh`) goes through this trait,
/// so tests can script the device's answers without a network.
#[make(Send)]
pub trait CommandRunner: Sync + 'static {
    /// Run `program` with `args` and wait for it to exit
    ///
    /// A non-zero exit status is not an error; it is reported in the
    /// returned [`CommandOutput`]. Errors mean the program could not be run.
    async fn run(&self, program: &str, args: &[String]) -> CommandResult<CommandOutput>;
}
