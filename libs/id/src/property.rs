//! Typed identifier properties.
//!
//! A property value is either text or an integer. Integers remember whether
//! they fit 32 bits, which only matters for how callers choose to read them;
//! two numbers with the same value are always equal, whichever variant holds
//! them.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::macros::impl_number_from;

/// The kind of value a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Text,
    Number,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Text => write!(f, "text"),
            PropertyKind::Number => write!(f, "number"),
        }
    }
}

/// An integer property value.
///
/// Equality and hashing go by numeric value, so `Number::Long(5)` equals
/// `Number::Int(5)`. Values stored in a [`PropertyValue`] are normalized with
/// [`Number::new`].
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Fits the signed 32-bit range.
    Int(i32),
    /// Requires 64 bits.
    Long(i64),
}

impl Number {
    /// Creates a number, using the narrowest representation that holds `value`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        match i32::try_from(value) {
            Ok(int) => Number::Int(int),
            Err(_) => Number::Long(value),
        }
    }

    /// Returns the value widened to 64 bits.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        match *self {
            Number::Int(int) => int as i64,
            Number::Long(long) => long,
        }
    }

    /// Returns the value if it fits 32 bits.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        i32::try_from(self.as_i64()).ok()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.as_i64() == other.as_i64()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_i64().hash(state);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(int) => write!(f, "{}", int),
            Number::Long(long) => write!(f, "{}", long),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Int(int) => serializer.serialize_i32(int),
            Number::Long(long) => serializer.serialize_i64(long),
        }
    }
}

impl From<Number> for i64 {
    fn from(number: Number) -> Self {
        number.as_i64()
    }
}

/// A property value: text or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    Text(String),
    Number(Number),
}

impl PropertyValue {
    /// Infers a typed value from its canonical text rendering.
    ///
    /// Base-10 integers within the 64-bit range become numbers; anything
    /// else is kept verbatim as text.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(value) => PropertyValue::Number(Number::new(value)),
            Err(_) => PropertyValue::Text(raw.to_string()),
        }
    }

    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Text(_) => PropertyKind::Text,
            PropertyValue::Number(_) => PropertyKind::Number,
        }
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            PropertyValue::Number(_) => None,
        }
    }

    /// Returns the number, if this is a numeric value.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            PropertyValue::Text(_) => None,
            PropertyValue::Number(number) => Some(*number),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PropertyValue::Text(text) => serializer.serialize_str(text),
            PropertyValue::Number(number) => number.serialize(serializer),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl From<Number> for PropertyValue {
    fn from(number: Number) -> Self {
        PropertyValue::Number(Number::new(number.as_i64()))
    }
}

impl_number_from!(i8, i16, i32, i64, u8, u16, u32);

/// A named property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Property {
    name: String,
    value: PropertyValue,
}

impl Property {
    /// Creates a property.
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property value.
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }
}

/// Properties keyed by name, kept in insertion order.
///
/// Setting a name that is already present replaces its value in place, so
/// the position of every name is fixed by its first insertion. Equality
/// compares the name-to-value mapping and ignores order.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: Vec<Property>,
}

impl Properties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property.
    ///
    /// Returns the previous value if the name existed.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        let property = Property::new(name, value);
        match self.entries.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, property.value)),
            None => {
                self.entries.push(property);
                None
            }
        }
    }

    /// Gets a property value.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Check if a name exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over properties in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.entries.iter()
    }

    /// Get all names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.name.as_str())
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|p| other.get(&p.name) == Some(&p.value))
    }
}

impl Eq for Properties {}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N, V> FromIterator<(N, V)> for Properties
where
    N: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (name, value) in iter {
            properties.insert(name, value);
        }
        properties
    }
}

impl Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for property in &self.entries {
            map.serialize_entry(&property.name, &property.value)?;
        }
        map.end()
    }
}
