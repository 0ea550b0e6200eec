//! Raw z-base32 commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Encode or decode raw z-base32.
#[derive(Debug, Args)]
pub struct Zbase32Command {
    #[command(subcommand)]
    command: Zbase32Subcommand,
}

#[derive(Debug, Subcommand)]
enum Zbase32Subcommand {
    /// Encode text (or hex bytes) as z-base32.
    Encode {
        /// Text to encode.
        input: String,

        /// Treat the input as hex-encoded bytes.
        #[arg(long)]
        hex: bool,
    },

    /// Decode z-base32 symbols.
    Decode {
        /// Symbols to decode.
        symbols: String,

        /// Print the decoded bytes as hex.
        #[arg(long)]
        hex: bool,
    },
}

#[derive(Debug, Serialize)]
struct CodecView<'a> {
    input: &'a str,
    output: String,
}

impl Zbase32Command {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let (input, output) = match &self.command {
            Zbase32Subcommand::Encode { input, hex } => (input, encode(input, *hex)?),
            Zbase32Subcommand::Decode { symbols, hex } => (symbols, decode(symbols, *hex)?),
        };

        match ctx.format {
            OutputFormat::Json => print_single(&CodecView { input, output }),
            OutputFormat::Table => println!("{}", output),
        }

        Ok(())
    }
}

fn encode(input: &str, hex: bool) -> Result<String> {
    let bytes = if hex {
        hex::decode(input).context("Input is not valid hex")?
    } else {
        input.as_bytes().to_vec()
    };

    debug!(bytes = bytes.len(), "encoding z-base32");
    Ok(opaque_zbase32::encode(bytes))
}

fn decode(symbols: &str, hex: bool) -> Result<String> {
    let bytes = opaque_zbase32::decode(symbols.trim())?;

    debug!(bytes = bytes.len(), "decoded z-base32");

    if hex {
        return Ok(hex::encode(bytes));
    }

    String::from_utf8(bytes).map_err(|_| CliError::NotUtf8.into())
}
