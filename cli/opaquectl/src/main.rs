//! opaquectl (opaque) - CLI for opaque identifiers
//!
//! Builds identifiers from a realm, sectors, and properties, prints their
//! text/scalar/Base64/JSON forms, and parses scalars back.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbosity())?;

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
