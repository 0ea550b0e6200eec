//! Roundtrip properties for identifier encodings.

use opaque_id::{Identifier, IdentifierBuilder, Number, PropertyValue};
use proptest::prelude::*;

fn property_value() -> impl Strategy<Value = PropertyValue> {
    prop_oneof![
        // Text that starts with a letter never reads back as a number.
        "[A-Za-z][A-Za-z0-9 .:@%?#é~-]{0,12}".prop_map(PropertyValue::from),
        any::<i32>().prop_map(PropertyValue::from),
        any::<i64>().prop_map(PropertyValue::from),
        any::<i64>().prop_map(|n| PropertyValue::Number(Number::Long(n))),
        any::<i32>().prop_map(|n| PropertyValue::from(Number::Int(n))),
    ]
}

fn identifier() -> impl Strategy<Value = Identifier> {
    (
        "[a-z0-9./?% &=#é-]{0,16}",
        proptest::collection::vec("[a-z0-9_-]{1,8}", 0..4),
        proptest::collection::vec(("[a-z][a-z0-9_]{0,7}", property_value()), 1..6),
    )
        .prop_map(|(realm, sectors, properties)| {
            let builder = properties.into_iter().fold(
                IdentifierBuilder::from_realm(realm).in_sector(sectors),
                |builder, (name, value)| builder.having(name, value),
            );
            builder.build().expect("at least one property")
        })
}

proptest! {
    #[test]
    fn scalar_roundtrip(id in identifier()) {
        let parsed = Identifier::from_value(&id.to_value()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn base64_roundtrip(id in identifier()) {
        let parsed = Identifier::from_base64(&id.to_base64()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn canonical_text_is_ascii(id in identifier()) {
        let text = id.to_text();
        prop_assert!(text.is_ascii());
        prop_assert_eq!(id.to_value().len(), opaque_zbase32::encoded_len(text.len()));
    }

    #[test]
    fn rendering_is_stable(id in identifier()) {
        let parsed = Identifier::from_value(&id.to_value()).unwrap();
        prop_assert_eq!(parsed.to_text(), id.to_text());
    }
}

#[test]
fn forked_builders_are_independent() {
    let base = Identifier::in_realm("tropian.io").in_sector(["scale"]);
    let a = base.having("dc", "west1");
    let b = base.having("dc", "east2").having("room", 1);

    let a = a.build().unwrap();
    let b = b.build().unwrap();

    assert_eq!(a.properties().len(), 1);
    assert_eq!(b.properties().len(), 2);
    assert_eq!(a.get_string("dc").unwrap(), Some("west1"));
    assert_eq!(b.get_string("dc").unwrap(), Some("east2"));
}
