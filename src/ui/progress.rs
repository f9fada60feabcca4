//! Progress lines for the provisioning steps

use std::io::Write;

use tracing::debug;

use crate::core::error::ProvisionResult;

/// Print the start of a progress line, without a newline
///
/// Console write failures are logged; they never abort the run.
pub fn start_step<W: Write>(output: &mut W, message: &str) {
    let written = write!(output, "{}", message).and_then(|_| output.flush());
    if let Err(e) = written {
        debug!(error = %e, "failed to write progress");
    }
}

/// Complete the progress line with `DONE` or `ERROR` and pass `result` on
pub fn finish_step<W: Write, T>(output: &mut W, result: ProvisionResult<T>) -> ProvisionResult<T> {
    let outcome = if result.is_ok() { "DONE" } else { "ERROR" };
    if let Err(e) = writeln!(output, "{}", outcome) {
        debug!(error = %e, "failed to write progress");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ProvisionError;

    /// Writer whose flush always fails
    struct BrokenPipe(Vec<u8>);

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_step_success() {
        let mut output = Vec::new();

        start_step(&mut output, "Scanning for the device... ");
        let result = finish_step(&mut output, Ok::<_, ProvisionError>(7));

        assert_eq!(result.unwrap(), 7);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Scanning for the device... DONE\n"
        );
    }

    #[test]
    fn test_step_failure_keeps_error() {
        let mut output = Vec::new();

        start_step(&mut output, "Scanning for the device... ");
        let result = finish_step::<_, ()>(&mut output, Err(ProvisionError::DeviceNotFound));

        assert!(matches!(result, Err(ProvisionError::DeviceNotFound)));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Scanning for the device... ERROR\n"
        );
    }

    #[test]
    fn test_flush_failure_does_not_abort() {
        let mut output = BrokenPipe(Vec::new());

        start_step(&mut output, "Connecting the device to HomeNet... ");
        let result = finish_step(&mut output, Ok::<_, ProvisionError>(()));

        assert!(result.is_ok());
        assert_eq!(
            String::from_utf8(output.0).unwrap(),
            "Connecting the device to HomeNet... DONE\n"
        );
    }
}
