//! Inspect command.

use anyhow::Result;
use clap::Args;
use opaque_id::{Identifier, Properties};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::output::{print_field, print_output, print_single, OutputFormat};

use super::CommandContext;

/// Parse an encoded identifier and show its realm, sectors, and properties.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Encoded identifier (a scalar unless --base64 or --text is given).
    input: String,

    /// Input is URL-safe Base64.
    #[arg(long, conflicts_with = "text")]
    base64: bool,

    /// Input is canonical text.
    #[arg(long)]
    text: bool,
}

#[derive(Debug, Serialize)]
struct IdentifierView<'a> {
    realm: &'a str,
    sectors: Vec<&'a str>,
    properties: &'a Properties,
    text: String,
    value: String,
}

#[derive(Debug, Serialize, Tabled)]
struct PropertyRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

impl InspectCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id = self.parse()?;

        debug!(
            input_len = self.input.len(),
            properties = id.properties().len(),
            "parsed identifier"
        );

        match ctx.format {
            OutputFormat::Json => print_single(&IdentifierView {
                realm: id.realm(),
                sectors: id.sectors(),
                properties: id.properties(),
                text: id.to_text(),
                value: id.to_value(),
            }),
            OutputFormat::Table => {
                print_field("Realm", or_dash(id.realm()));
                print_field("Sectors", or_dash(&id.sectors().join(" / ")));
                print_field("Text", &id.to_text());
                println!();
                print_output(&property_rows(&id), ctx.format);
            }
        }

        Ok(())
    }

    fn parse(&self) -> Result<Identifier> {
        let id = if self.base64 {
            Identifier::from_base64(&self.input)?
        } else if self.text {
            Identifier::from_text(&self.input)?
        } else {
            Identifier::from_value(self.input.trim())?
        };
        Ok(id)
    }
}

fn property_rows(id: &Identifier) -> Vec<PropertyRow> {
    id.properties()
        .iter()
        .map(|property| PropertyRow {
            name: property.name().to_string(),
            kind: property.value().kind().to_string(),
            value: property.value().to_string(),
        })
        .collect()
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opaque_id::IdentifierError;

    fn sample() -> Identifier {
        Identifier::in_realm("tropian.io")
            .in_sector(["scale", "compute"])
            .having("dc", "west1")
            .having("room", 442)
            .build()
            .unwrap()
    }

    fn command(input: String, base64: bool, text: bool) -> InspectCommand {
        InspectCommand {
            input,
            base64,
            text,
        }
    }

    #[test]
    fn test_parse_each_form() {
        let id = sample();
        assert_eq!(command(id.to_value(), false, false).parse().unwrap(), id);
        assert_eq!(command(id.to_base64(), true, false).parse().unwrap(), id);
        assert_eq!(command(id.to_text(), false, true).parse().unwrap(), id);
    }

    #[test]
    fn test_parse_trims_scalar_whitespace() {
        let id = sample();
        let input = format!("  {}\n", id.to_value());
        assert_eq!(command(input, false, false).parse().unwrap(), id);
    }

    #[test]
    fn test_parse_bad_scalar() {
        let err = command("0".to_string(), false, false).parse().unwrap_err();
        assert!(err
            .downcast_ref::<IdentifierError>()
            .is_some_and(IdentifierError::is_malformed));
    }

    #[test]
    fn test_property_rows() {
        let rows = property_rows(&sample());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "room");
        assert_eq!(rows[1].kind, "number");
        assert_eq!(rows[1].value, "442");
    }

    #[test]
    fn test_view_serializes_typed_properties() {
        let id = sample();
        let view = IdentifierView {
            realm: id.realm(),
            sectors: id.sectors(),
            properties: id.properties(),
            text: id.to_text(),
            value: id.to_value(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["sectors"], serde_json::json!(["scale", "compute"]));
        assert_eq!(
            json["properties"],
            serde_json::json!({ "dc": "west1", "room": 442 })
        );
    }
}
