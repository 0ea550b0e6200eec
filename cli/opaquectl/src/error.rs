//! Error handling and display for the CLI.

use colored::Colorize;
use opaque_id::IdentifierError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No realm or sector given, and no default realm is configured.")]
    NoStart,

    #[error("Invalid property '{0}': expected NAME=VALUE")]
    InvalidProperty(String),

    #[error("Decoded bytes are not UTF-8 text.")]
    NotUtf8,
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint(err) {
        eprintln!("\n{}", format!("Hint: {}", hint).yellow());
    }
}

/// Pick a hint for errors the user can act on.
fn hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return match cli_err {
            CliError::NoStart => Some(
                "Pass --realm or --sector, or run `opaque config set-realm <REALM>`.",
            ),
            CliError::NotUtf8 => Some("Re-run with --hex to print the raw bytes."),
            CliError::InvalidProperty(_) => None,
        };
    }

    match err.downcast_ref::<IdentifierError>()? {
        IdentifierError::Unbuildable => Some("Add at least one property with --prop NAME=VALUE."),
        IdentifierError::MalformedScalar(_) => Some(
            "Scalars use the z-base32 alphabet; pass --base64 or --text to inspect other forms.",
        ),
        IdentifierError::PropertyTypeMismatch { .. } => None,
    }
}
