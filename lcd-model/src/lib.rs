//! lcd: load, check, dump.
//!
//! Declare a record shape once and get validated construction, loading from
//! a serialized document, and dumping back to one:
//! - [`Slot`] / [`MISSING`]: the "not supplied" marker, never serialized
//! - [`FieldSpec`]: one field's validators, default, and load/dump hooks
//! - [`verify`]: reusable validators (`not_missing`, `is_type`, `one_of`, comparisons)
//! - [`RecordSchema`]: a type's field registry, built once
//! - [`Record`]: construction, `load`, and `dump` against a schema
//! - [`FieldSpec::record`] / [`FieldSpec::record_list`]: embedded records
//! - [`Codec`]: pluggable serialization ([`JsonCodec`], [`StructCodec`])
//!
//! Record types are usually declared with [`record!`]:
//!
//! ```ignore
//! use lcd_model::{mapping, record, verify, FieldSpec, Record};
//!
//! record! {
//!     pub struct Person {
//!         name: FieldSpec::new().check(verify::not_missing()),
//!         nickname: FieldSpec::new(),
//!     }
//! }
//!
//! let person = Person::new(mapping! { "name" => "john" })?;
//! assert_eq!(person.dump()?, r#"{"name":"john"}"#);
//! ```

mod codec;
mod error;
mod field;
mod macros;
mod missing;
mod nested;
mod record;
mod schema;
mod value;
pub mod verify;

pub use codec::{Codec, JsonCodec, StructCodec};
pub use error::{CodecError, Error, FieldErrors, InvalidRecord, Result};
pub use field::{FieldKind, FieldSpec, PostLoad, PreDump};
pub use missing::{MISSING, Slot};
pub use record::{AnyRecord, Record};
pub use schema::{RecordSchema, RecordSchemaBuilder};
pub use value::{Mapping, Value, ValueKind};
pub use verify::{Outcome, Validate};
