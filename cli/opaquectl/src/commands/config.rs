//! Config commands (saved defaults for realm and output format).

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::{config_path, REALM_ENV};
use crate::output::{print_field, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage saved CLI configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,

    /// Print the config file path.
    Path,

    /// Save a default realm for `opaque build`.
    SetRealm {
        /// Realm to use when --realm and --sector are omitted.
        realm: String,
    },

    /// Remove the saved default realm.
    UnsetRealm,

    /// Save the default output format.
    SetFormat {
        #[arg(value_enum)]
        format: OutputFormat,
    },
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    default_realm: Option<String>,
    realm_override: Option<String>,
    format: OutputFormat,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Path => {
                println!("{}", config_path()?.display());
                Ok(())
            }
            ConfigSubcommand::SetRealm { realm } => set_realm(ctx, Some(realm)),
            ConfigSubcommand::UnsetRealm => set_realm(ctx, None),
            ConfigSubcommand::SetFormat { format } => set_format(ctx, format),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: config_path()?.display().to_string(),
        default_realm: ctx.config.default_realm.clone(),
        realm_override: std::env::var(REALM_ENV).ok().filter(|r| !r.is_empty()),
        format: ctx.config.format,
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            print_field("path", &view.path);
            print_field("default_realm", view.default_realm.as_deref().unwrap_or("-"));
            if let Some(realm) = &view.realm_override {
                print_field(REALM_ENV, realm);
            }
            print_field(
                "format",
                match view.format {
                    OutputFormat::Table => "table",
                    OutputFormat::Json => "json",
                },
            );
        }
    }

    Ok(())
}

fn set_realm(mut ctx: CommandContext, realm: Option<String>) -> Result<()> {
    let message = match &realm {
        Some(realm) => format!("Default realm set to {}", realm),
        None => "Default realm removed".to_string(),
    };

    ctx.config.default_realm = realm;
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success(&message),
    }

    Ok(())
}

fn set_format(mut ctx: CommandContext, format: OutputFormat) -> Result<()> {
    ctx.config.format = format;
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Default output format saved"),
    }

    Ok(())
}
