//! CLI commands.

mod build;
mod config;
mod inspect;
mod zbase32;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// opaque - Build, encode, and inspect opaque identifiers.
#[derive(Debug, Parser)]
#[command(name = "opaque")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, value_enum, env = "OPAQUE_FORMAT")]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build an identifier and print its encodings.
    Build(build::BuildCommand),

    /// Parse an encoded identifier and show its contents.
    Inspect(inspect::InspectCommand),

    /// Encode or decode raw z-base32.
    Zbase32(zbase32::Zbase32Command),

    /// Show or change saved CLI configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Requested log verbosity.
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Whether the command reads saved settings beyond the output format.
    ///
    /// Other commands still run with a default config when the file is
    /// unreadable.
    fn needs_config(&self) -> bool {
        matches!(self.command, Commands::Build(_) | Commands::Config(_))
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = if self.needs_config() {
            Config::load()?
        } else {
            Config::load_or_default()
        };
        let format = self.format.unwrap_or(config.format);

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Build(cmd) => cmd.run(ctx),
            Commands::Inspect(cmd) => cmd.run(ctx),
            Commands::Zbase32(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("opaque {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
