//! Canonical text form.
//!
//! ```text
//! //{realm}/{sector}/{sector}?{name}={value}&{name}={value}
//! ```
//!
//! The realm is the authority (empty for "no realm"), the sector path
//! follows the first `/`, and properties form the query in insertion order.
//! Within the sector path and the query, `/`, `&`, and `=` are written
//! verbatim, so names and values must not contain them. The realm escapes
//! `/` as well, so any realm reads back intact. Bytes outside the URI-safe
//! set are percent-encoded, which keeps the text ASCII.

use std::fmt::Write;

use crate::{Properties, PropertyValue, ScalarError};

/// The three components recovered from canonical text.
#[derive(Debug)]
pub(crate) struct CanonicalParts {
    pub realm: String,
    pub sector_path: String,
    pub properties: Properties,
}

/// Renders canonical text.
pub(crate) fn render(realm: &str, sector_path: &str, properties: &Properties) -> String {
    let mut out = String::with_capacity(realm.len() + sector_path.len() + 16 * properties.len());

    out.push_str("//");
    escape_into(&mut out, realm, is_realm_verbatim);
    out.push('/');
    escape_into(&mut out, sector_path, is_verbatim);

    for (i, property) in properties.iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        escape_into(&mut out, property.name(), is_verbatim);
        out.push('=');
        escape_into(&mut out, &property.value().to_string(), is_verbatim);
    }

    out
}

/// Parses canonical text.
///
/// Text without a leading `//` has an empty realm. Query values are typed
/// with [`PropertyValue::infer`]; a repeated name keeps its last value.
pub(crate) fn parse(text: &str) -> Result<CanonicalParts, ScalarError> {
    let (realm, rest) = match text.strip_prefix("//") {
        Some(after) => {
            let end = after.find(|c: char| c == '/' || c == '?').unwrap_or(after.len());
            (unescape(&after[..end], 2)?, &after[end..])
        }
        None => (String::new(), text),
    };
    let rest_offset = text.len() - rest.len();

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let Some(path) = path.strip_prefix('/') else {
        return Err(ScalarError::MissingPath);
    };
    let sector_path = unescape(path, rest_offset + 1)?;

    let mut properties = Properties::new();
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        let mut offset = rest_offset + path.len() + 2;
        for pair in query.split('&') {
            let Some((name, raw)) = pair.split_once('=') else {
                return Err(ScalarError::MissingValue {
                    pair: pair.to_string(),
                });
            };
            let key = unescape(name, offset)?;
            let value = unescape(raw, offset + name.len() + 1)?;
            properties.insert(key, PropertyValue::infer(&value));
            offset += pair.len() + 1;
        }
    }

    Ok(CanonicalParts {
        realm,
        sector_path,
        properties,
    })
}

/// Bytes written without escaping.
fn is_verbatim(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'$'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b':'
                | b'@'
                | b'/'
                | b'&'
                | b'='
        )
}

/// Realm bytes written without escaping. `/` would end the authority.
fn is_realm_verbatim(byte: u8) -> bool {
    byte != b'/' && is_verbatim(byte)
}

fn escape_into(out: &mut String, component: &str, verbatim: fn(u8) -> bool) {
    for byte in component.bytes() {
        if verbatim(byte) {
            out.push(char::from(byte));
        } else {
            // Writing to a String cannot fail.
            let _ = write!(out, "%{:02X}", byte);
        }
    }
}

/// Decodes `%XX` escapes. `offset` locates `component` within the full text
/// for error reporting.
fn unescape(component: &str, offset: usize) -> Result<String, ScalarError> {
    if !component.contains('%') {
        return Ok(component.to_string());
    }

    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).and_then(|b| hex_value(*b));
            let lo = bytes.get(i + 2).and_then(|b| hex_value(*b));
            let (Some(hi), Some(lo)) = (hi, lo) else {
                return Err(ScalarError::InvalidEscape { offset: offset + i });
            };
            out.push(hi << 4 | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    Ok(String::from_utf8(out)?)
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    fn sample_properties() -> Properties {
        let mut properties = Properties::new();
        properties.insert("dc", "west1");
        properties.insert("room", 442);
        properties.insert("isle", "E");
        properties.insert("rack", "E5");
        properties
    }

    #[test]
    fn test_render() {
        let text = render("tropian.io", "scale/compute", &sample_properties());
        assert_eq!(
            text,
            "//tropian.io/scale/compute?dc=west1&room=442&isle=E&rack=E5"
        );
    }

    #[test]
    fn test_render_empty_components() {
        assert_eq!(render("", "", &Properties::new()), "///");
        let properties: Properties = [("a", 1)].into_iter().collect();
        assert_eq!(render("", "x", &properties), "///x?a=1");
        assert_eq!(render("r", "", &properties), "//r/?a=1");
    }

    #[test]
    fn test_render_escapes_unsafe_bytes() {
        let properties: Properties = [("note", "a b?c#d%é")].into_iter().collect();
        assert_eq!(
            render("r", "x", &properties),
            "//r/x?note=a%20b%3Fc%23d%25%C3%A9"
        );
    }

    #[test]
    fn test_realm_escapes_slash() {
        let properties: Properties = [("k", "v")].into_iter().collect();
        let text = render("a/b", "x", &properties);
        assert_eq!(text, "//a%2Fb/x?k=v");

        let parts = parse(&text).unwrap();
        assert_eq!(parts.realm, "a/b");
        assert_eq!(parts.sector_path, "x");
    }

    #[test]
    fn test_realm_with_reserved_characters() {
        let properties: Properties = [("k", "v")].into_iter().collect();
        let realm = "a/b?c%d e&f=g";
        let text = render(realm, "", &properties);
        assert_eq!(text, "//a%2Fb%3Fc%25d%20e&f=g/?k=v");

        let parts = parse(&text).unwrap();
        assert_eq!(parts.realm, realm);
        assert_eq!(parts.sector_path, "");
    }

    #[test]
    fn test_parse() {
        let parts = parse("//tropian.io/scale/compute?dc=west1&room=442&isle=E&rack=E5").unwrap();
        assert_eq!(parts.realm, "tropian.io");
        assert_eq!(parts.sector_path, "scale/compute");
        assert_eq!(parts.properties, sample_properties());
        assert_eq!(
            parts.properties.get("room"),
            Some(&PropertyValue::Number(Number::Int(442)))
        );
    }

    #[test]
    fn test_parse_without_authority() {
        let parts = parse("/scale?dc=west1").unwrap();
        assert_eq!(parts.realm, "");
        assert_eq!(parts.sector_path, "scale");
    }

    #[test]
    fn test_parse_keeps_leading_slash_of_sector_path() {
        let properties: Properties = [("a", 1)].into_iter().collect();
        let text = render("", "/x", &properties);
        let parts = parse(&text).unwrap();
        assert_eq!(parts.realm, "");
        assert_eq!(parts.sector_path, "/x");
    }

    #[test]
    fn test_parse_decodes_escapes() {
        let parts = parse("//r/x?note=a%20b%3Fc%23d%25%C3%A9").unwrap();
        assert_eq!(
            parts.properties.get("note"),
            Some(&PropertyValue::from("a b?c#d%é"))
        );
    }

    #[test]
    fn test_parse_value_may_contain_equals() {
        let parts = parse("//r/x?expr=a=b").unwrap();
        assert_eq!(parts.properties.get("expr"), Some(&PropertyValue::from("a=b")));
    }

    #[test]
    fn test_parse_repeated_name_keeps_last() {
        let parts = parse("//r/x?dc=west1&room=1&dc=east2").unwrap();
        assert_eq!(parts.properties.names().collect::<Vec<_>>(), vec!["dc", "room"]);
        assert_eq!(parts.properties.get("dc"), Some(&PropertyValue::from("east2")));
    }

    #[test]
    fn test_parse_missing_path() {
        assert_eq!(parse("//tropian.io").unwrap_err(), ScalarError::MissingPath);
        assert_eq!(parse("//tropian.io?a=1").unwrap_err(), ScalarError::MissingPath);
        assert_eq!(parse("plain").unwrap_err(), ScalarError::MissingPath);
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse("//r/x?a=1&flag").unwrap_err(),
            ScalarError::MissingValue {
                pair: "flag".to_string()
            }
        );
    }

    #[test]
    fn test_parse_invalid_escape() {
        assert_eq!(
            parse("//r/x?a=%G1").unwrap_err(),
            ScalarError::InvalidEscape { offset: 8 }
        );
        assert_eq!(
            parse("//r/x%2").unwrap_err(),
            ScalarError::InvalidEscape { offset: 5 }
        );
    }

    #[test]
    fn test_parse_invalid_utf8_escape() {
        assert!(matches!(
            parse("//r/x?a=%FF").unwrap_err(),
            ScalarError::Utf8(_)
        ));
    }
}
