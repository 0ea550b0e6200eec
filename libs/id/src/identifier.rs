//! The identifier value and its encoded forms.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::text::{self, CanonicalParts};
use crate::{
    IdentifierBuilder, IdentifierError, Number, Properties, PropertyKind, PropertyValue,
    ScalarError,
};

/// An opaque identifier: realm, sector path, and at least one property.
///
/// Identifiers are immutable. Two identifiers are equal when their realm,
/// sector path, and name-to-value mapping are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    realm: String,
    sector_path: String,
    properties: Properties,
}

impl Identifier {
    /// Starts a builder in the given realm.
    pub fn in_realm(realm: impl Into<String>) -> IdentifierBuilder {
        IdentifierBuilder::from_realm(realm)
    }

    /// Starts a builder in the given sector.
    pub fn in_sector(sector: impl Into<String>) -> IdentifierBuilder {
        IdentifierBuilder::from_sector(sector)
    }

    pub(crate) fn from_parts(realm: String, sector_path: String, properties: Properties) -> Self {
        Self {
            realm,
            sector_path,
            properties,
        }
    }

    /// Returns the realm; empty when the identifier has none.
    #[must_use]
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Returns the sector path with segments joined by `/`.
    #[must_use]
    pub fn sector_path(&self) -> &str {
        &self.sector_path
    }

    /// Returns the sector segments in order; empty for an empty path.
    #[must_use]
    pub fn sectors(&self) -> Vec<&str> {
        if self.sector_path.is_empty() {
            return Vec::new();
        }
        self.sector_path.split('/').collect()
    }

    /// Returns all properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns a property value, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Returns a text property.
    ///
    /// An absent name is `Ok(None)`; a numeric property is a
    /// [`IdentifierError::PropertyTypeMismatch`].
    pub fn get_string(&self, name: &str) -> Result<Option<&str>, IdentifierError> {
        match self.properties.get(name) {
            None => Ok(None),
            Some(PropertyValue::Text(text)) => Ok(Some(text)),
            Some(other) => Err(mismatch(name, PropertyKind::Text, other)),
        }
    }

    /// Returns a numeric property.
    ///
    /// An absent name is `Ok(None)`; a text property is a
    /// [`IdentifierError::PropertyTypeMismatch`].
    pub fn get_number(&self, name: &str) -> Result<Option<Number>, IdentifierError> {
        match self.properties.get(name) {
            None => Ok(None),
            Some(PropertyValue::Number(number)) => Ok(Some(*number)),
            Some(other) => Err(mismatch(name, PropertyKind::Number, other)),
        }
    }

    /// Returns the canonical text form.
    #[must_use]
    pub fn to_text(&self) -> String {
        text::render(&self.realm, &self.sector_path, &self.properties)
    }

    /// Returns the scalar value: the z-base32 encoding of the canonical text.
    #[must_use]
    pub fn to_value(&self) -> String {
        opaque_zbase32::encode(self.to_text())
    }

    /// Returns the URL-safe, unpadded Base64 encoding of the canonical text.
    #[must_use]
    pub fn to_base64(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.to_text())
    }

    /// Returns the JSON form.
    ///
    /// The object holds the scalar under `"value"`, followed by every
    /// property as a string in insertion order. A property named `value` is
    /// shadowed by the scalar.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::with_capacity(self.properties.len() + 1);
        object.insert(
            "value".to_string(),
            serde_json::Value::String(self.to_value()),
        );
        for property in &self.properties {
            object
                .entry(property.name())
                .or_insert_with(|| serde_json::Value::String(property.value().to_string()));
        }
        serde_json::Value::Object(object)
    }

    /// Returns the JSON form as compact text.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Parses a scalar value produced by [`Identifier::to_value`].
    pub fn from_value(scalar: &str) -> Result<Self, IdentifierError> {
        let bytes = opaque_zbase32::decode(scalar).map_err(ScalarError::from)?;
        Self::from_bytes(bytes)
    }

    /// Parses the Base64 form produced by [`Identifier::to_base64`].
    pub fn from_base64(encoded: &str) -> Result<Self, IdentifierError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(ScalarError::from)?;
        Self::from_bytes(bytes)
    }

    /// Parses canonical text produced by [`Identifier::to_text`].
    ///
    /// Integer-shaped values are read back as numbers, so a text property
    /// such as `"442"` returns as the number 442.
    pub fn from_text(text: &str) -> Result<Self, IdentifierError> {
        let CanonicalParts {
            realm,
            sector_path,
            properties,
        } = text::parse(text)?;

        if properties.is_empty() {
            return Err(ScalarError::NoProperties.into());
        }

        Ok(Self::from_parts(realm, sector_path, properties))
    }

    fn from_bytes(bytes: Vec<u8>) -> Result<Self, IdentifierError> {
        let text = String::from_utf8(bytes).map_err(ScalarError::from)?;
        Self::from_text(&text)
    }
}

fn mismatch(name: &str, expected: PropertyKind, actual: &PropertyValue) -> IdentifierError {
    IdentifierError::PropertyTypeMismatch {
        name: name.to_string(),
        expected,
        actual: actual.kind(),
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_value())
    }
}

impl std::str::FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl serde::Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_value())
    }
}

impl<'de> serde::Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_value(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
