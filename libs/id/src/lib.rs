//! # opaque-id
//!
//! Opaque identifiers built from a realm, a hierarchical sector path, and
//! typed properties.
//!
//! ## Design Principles
//!
//! - Identifiers are immutable; builders are persistent and can be forked
//! - Every identifier carries at least one property
//! - The canonical text form is the basis for every other encoding
//! - The scalar form roundtrips (build → encode → parse)
//!
//! ## Forms
//!
//! | Form      | Example                                                  |
//! |-----------|----------------------------------------------------------|
//! | text      | `//tropian.io/scale/compute?dc=west1&room=442`           |
//! | scalar    | z-base32 of the text (`fhzzehuxqbwsn5tq...`)             |
//! | base64    | URL-safe, unpadded Base64 of the text                    |
//! | json      | `{"value":"<scalar>","dc":"west1","room":"442"}`         |
//!
//! ```
//! use opaque_id::{Identifier, Number};
//!
//! let id = Identifier::in_realm("tropian.io")
//!     .in_sector(["scale", "compute"])
//!     .having("dc", "west1")
//!     .having("room", 442)
//!     .build()?;
//!
//! let parsed = Identifier::from_value(&id.to_value())?;
//! assert_eq!(parsed, id);
//! assert_eq!(parsed.get_number("room")?, Some(Number::Int(442)));
//! # Ok::<(), opaque_id::IdentifierError>(())
//! ```

mod builder;
mod error;
mod identifier;
mod macros;
mod property;
mod text;

pub use builder::IdentifierBuilder;
pub use error::{IdentifierError, ScalarError};
pub use identifier::Identifier;
pub use property::{Number, Properties, Property, PropertyKind, PropertyValue};
