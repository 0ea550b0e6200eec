//! Persistent identifier builder.

use crate::{Identifier, IdentifierError, Properties, PropertyValue};

/// Builder for [`Identifier`]s.
///
/// Every step borrows the builder and returns a new one, so a builder can
/// be shared or forked into divergent chains without either branch seeing
/// the other's additions.
///
/// ```
/// use opaque_id::Identifier;
///
/// let base = Identifier::in_realm("tropian.io").in_sector(["scale", "compute"]);
/// let west = base.having("dc", "west1").build()?;
/// let east = base.having("dc", "east2").build()?;
///
/// assert_ne!(west, east);
/// assert!(base.build().is_err());
/// # Ok::<(), opaque_id::IdentifierError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct IdentifierBuilder {
    realm: String,
    sector_path: String,
    properties: Properties,
}

impl IdentifierBuilder {
    /// Starts a builder in a realm, with an empty sector path.
    pub fn from_realm(realm: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
            sector_path: String::new(),
            properties: Properties::new(),
        }
    }

    /// Starts a builder in a sector, with an empty realm.
    ///
    /// The sector may already contain `/`-separated segments.
    pub fn from_sector(sector: impl Into<String>) -> Self {
        Self {
            realm: String::new(),
            sector_path: sector.into(),
            properties: Properties::new(),
        }
    }

    /// Returns a builder whose sector path is `segments` joined by `/`.
    ///
    /// The previous sector path is replaced, not extended.
    pub fn in_sector<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sector_path = segments
            .into_iter()
            .map(|segment| segment.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("/");

        Self {
            sector_path,
            ..self.clone()
        }
    }

    /// Returns a builder with one more property.
    ///
    /// A name that is already set keeps its position and takes the new value.
    pub fn having(&self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        let mut next = self.clone();
        next.properties.insert(name, value);
        next
    }

    /// Returns the realm set so far.
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Returns the sector path set so far.
    pub fn sector_path(&self) -> &str {
        &self.sector_path
    }

    /// Returns the properties accumulated so far.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Builds the identifier.
    ///
    /// Fails with [`IdentifierError::Unbuildable`] when no property has been
    /// added.
    pub fn build(&self) -> Result<Identifier, IdentifierError> {
        if self.properties.is_empty() {
            return Err(IdentifierError::Unbuildable);
        }

        Ok(Identifier::from_parts(
            self.realm.clone(),
            self.sector_path.clone(),
            self.properties.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn test_build_requires_property() {
        let err = IdentifierBuilder::from_realm("domain").build().unwrap_err();
        assert!(err.is_unbuildable());

        let err = IdentifierBuilder::from_sector("path").build().unwrap_err();
        assert_eq!(err, IdentifierError::Unbuildable);
    }

    #[test]
    fn test_entry_points_default_other_component() {
        let realm = IdentifierBuilder::from_realm("net.example");
        assert_eq!(realm.realm(), "net.example");
        assert_eq!(realm.sector_path(), "");

        let sector = IdentifierBuilder::from_sector("some/path");
        assert_eq!(sector.realm(), "");
        assert_eq!(sector.sector_path(), "some/path");
    }

    #[test]
    fn test_in_sector_replaces_path() {
        let builder = IdentifierBuilder::from_realm("r")
            .in_sector(["a", "b"])
            .in_sector(vec!["c".to_string()]);
        assert_eq!(builder.sector_path(), "c");
    }

    #[test]
    fn test_in_sector_keeps_properties() {
        let builder = IdentifierBuilder::from_realm("r")
            .having("dc", "west1")
            .in_sector(["scale"]);
        assert_eq!(builder.properties().len(), 1);
    }

    #[test]
    fn test_having_does_not_mutate_source() {
        let base = IdentifierBuilder::from_realm("r").having("dc", "west1");
        let left = base.having("room", 442);
        let right = base.having("isle", "E");

        assert_eq!(base.properties().len(), 1);
        assert!(left.properties().contains_key("room"));
        assert!(!left.properties().contains_key("isle"));
        assert!(right.properties().contains_key("isle"));
        assert!(!right.properties().contains_key("room"));
    }

    #[test]
    fn test_having_same_name_last_wins() {
        let id = IdentifierBuilder::from_realm("r")
            .having("dc", "west1")
            .having("room", 1)
            .having("dc", 2)
            .build()
            .unwrap();

        assert_eq!(id.properties().len(), 2);
        assert_eq!(
            id.properties().names().collect::<Vec<_>>(),
            vec!["dc", "room"]
        );
        assert_eq!(id.get("dc"), Some(&PropertyValue::Number(Number::Int(2))));
    }
}
