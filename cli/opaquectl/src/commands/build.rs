//! Build command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use opaque_id::{Identifier, PropertyValue};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

/// Build an identifier from a realm or sector plus properties.
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Realm the identifier belongs to.
    #[arg(long, conflicts_with = "sector")]
    realm: Option<String>,

    /// Starting sector path, used instead of a realm.
    #[arg(long)]
    sector: Option<String>,

    /// Sector segment (repeatable); replaces the starting sector path.
    #[arg(long = "in", value_name = "SEGMENT")]
    segments: Vec<String>,

    /// Property as NAME=VALUE (repeatable). Integer values become numbers.
    #[arg(short, long = "prop", value_name = "NAME=VALUE", value_parser = parse_property)]
    props: Vec<(String, String)>,

    /// Keep every property value as text.
    #[arg(long)]
    text_only: bool,

    /// Print only one form, undecorated.
    #[arg(long, value_enum)]
    only: Option<Form>,
}

/// A single encoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Form {
    /// Canonical text.
    Text,
    /// Scalar (z-base32) value.
    Value,
    /// URL-safe Base64.
    Base64,
    /// JSON object.
    Json,
}

#[derive(Debug, Serialize)]
struct FormsView {
    text: String,
    value: String,
    base64: String,
    json: serde_json::Value,
}

#[derive(Debug, Serialize, Tabled)]
struct FormRow {
    #[tabled(rename = "FORM")]
    form: &'static str,
    #[tabled(rename = "ENCODING")]
    encoding: String,
}

impl BuildCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id = self.build(&ctx)?;

        debug!(
            realm = id.realm(),
            sector_path = id.sector_path(),
            properties = id.properties().len(),
            "built identifier"
        );

        if let Some(form) = self.only {
            println!("{}", render(&id, form));
            return Ok(());
        }

        match ctx.format {
            OutputFormat::Json => print_single(&FormsView {
                text: id.to_text(),
                value: id.to_value(),
                base64: id.to_base64(),
                json: id.to_json(),
            }),
            OutputFormat::Table => {
                let rows: Vec<FormRow> = [
                    ("text", Form::Text),
                    ("value", Form::Value),
                    ("base64", Form::Base64),
                    ("json", Form::Json),
                ]
                .into_iter()
                .map(|(name, form)| FormRow {
                    form: name,
                    encoding: render(&id, form),
                })
                .collect();
                print_output(&rows, ctx.format);
            }
        }

        Ok(())
    }

    fn build(&self, ctx: &CommandContext) -> Result<Identifier> {
        let start = match (&self.realm, &self.sector) {
            (Some(realm), _) => Identifier::in_realm(realm.as_str()),
            (None, Some(sector)) => Identifier::in_sector(sector.as_str()),
            (None, None) => {
                let realm = ctx.config.effective_realm().ok_or(CliError::NoStart)?;
                Identifier::in_realm(realm)
            }
        };

        let located = if self.segments.is_empty() {
            start
        } else {
            start.in_sector(&self.segments)
        };

        let builder = self.props.iter().fold(located, |builder, (name, raw)| {
            let value = if self.text_only {
                PropertyValue::from(raw.as_str())
            } else {
                PropertyValue::infer(raw)
            };
            builder.having(name.as_str(), value)
        });

        Ok(builder.build()?)
    }
}

fn render(id: &Identifier, form: Form) -> String {
    match form {
        Form::Text => id.to_text(),
        Form::Value => id.to_value(),
        Form::Base64 => id.to_base64(),
        Form::Json => id.to_json_string(),
    }
}

/// Parse a `NAME=VALUE` argument, splitting at the first `=`.
fn parse_property(arg: &str) -> Result<(String, String), CliError> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(CliError::InvalidProperty(arg.to_string())),
    }
}
