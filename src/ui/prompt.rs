//! Interactive prompts for network selection and credentials

use std::{
    io::{BufRead, Write},
    num::IntErrorKind,
};

use secrecy::SecretString;
use thiserror::Error;
use tracing::debug;

use crate::core::{
    error::{ProvisionError, ProvisionResult},
    types::WirelessNetwork,
};

/// Rejected selection input; the operator is asked again
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("\"{0}\" is not a number, try again")]
    NotANumber(String),

    #[error("{0} is out of range, try again")]
    OutOfRange(String),
}

/// Parse a 1-based selection among `count` entries into a 0-based index
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let input = input.trim();
    let choice: i64 = input
        .parse()
        .map_err(|e: std::num::ParseIntError| match e.kind() {
            // Too many digits is still a number
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                SelectionError::OutOfRange(input.to_string())
            }
            _ => SelectionError::NotANumber(input.to_string()),
        })?;

    usize::try_from(choice)
        .ok()
        .filter(|&n| (1..=count).contains(&n))
        .map(|n| n - 1)
        .ok_or_else(|| SelectionError::OutOfRange(input.to_string()))
}

/// Ask until the operator picks one of `count` entries
///
/// Returns the 0-based index. Fails only if the input cannot be read or is
/// closed.
pub fn prompt_selection<R, W>(input: &mut R, output: &mut W, count: usize) -> ProvisionResult<usize>
where
    R: BufRead,
    W: Write,
{
    if count == 0 {
        return Err(ProvisionError::Prompt("no networks to choose from".into()));
    }

    let io_error = |e: std::io::Error| ProvisionError::Prompt(e.to_string());

    loop {
        write!(
            output,
            "Which network would you like to connect to? (1-{}): ",
            count
        )
        .map_err(io_error)?;
        output.flush().map_err(io_error)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_error)? == 0 {
            return Err(ProvisionError::Prompt("input closed".into()));
        }

        match parse_selection(&line, count) {
            Ok(index) => return Ok(index),
            Err(e) => {
                debug!(input = %line.trim(), "rejected selection");
                writeln!(output, "{}", e).map_err(io_error)?;
            }
        }
    }
}

/// Ask for the network's passphrase with echo disabled
///
/// Returns `None` without prompting for open networks.
pub fn prompt_password(network: &WirelessNetwork) -> ProvisionResult<Option<SecretString>> {
    if !network.password_required {
        return Ok(None);
    }

    let password = dialoguer::Password::new()
        .with_prompt(format!("Enter the password for {}", network.name))
        .allow_empty_password(true)
        .interact()
        .map_err(|e| ProvisionError::Prompt(e.to_string()))?;

    Ok(Some(SecretString::new(password)))
}
