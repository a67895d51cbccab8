//! Fields that embed other records.
//!
//! Their hooks call the embedded type's own `load`/`dump` through
//! [`StructCodec`], so a document is parsed and rendered as text exactly once
//! no matter how deep the nesting goes. Validators on these fields receive
//! the loaded record (or list of records), not the raw mapping.

use std::any::TypeId;

use crate::codec::StructCodec;
use crate::error::{Error, Result};
use crate::field::{FieldKind, FieldSpec};
use crate::record::Record;
use crate::value::Value;

fn short_type_name<R>() -> &'static str {
    let full = std::any::type_name::<R>();
    full.rsplit("::").next().unwrap_or(full)
}

fn dump_embedded<R: Record>(value: &Value) -> Result<Value> {
    match value {
        Value::Record(record) if record.record_type_id() == TypeId::of::<R>() => {
            record.dump_struct().map(Value::Map)
        }
        Value::Record(record) => Err(Error::transform(format!(
            "expected an embedded {}, found {}",
            short_type_name::<R>(),
            record.record_name()
        ))),
        other => Err(Error::transform(format!(
            "expected an embedded record, found {}",
            other.kind()
        ))),
    }
}

fn load_embedded<R: Record>(raw: Value) -> Result<Value> {
    match raw {
        Value::Map(mapping) => R::load_with(mapping, &StructCodec).map(Value::record),
        other => Err(Error::transform(format!(
            "expected a mapping for {}, found {}",
            short_type_name::<R>(),
            other.kind()
        ))),
    }
}

fn dump_embedded_list<R: Record>(value: &Value) -> Result<Value> {
    match value {
        Value::List(items) => items
            .iter()
            .map(dump_embedded::<R>)
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        other => Err(Error::transform(format!(
            "expected a list of embedded records, found {}",
            other.kind()
        ))),
    }
}

fn load_embedded_list<R: Record>(raw: Value) -> Result<Value> {
    match raw {
        Value::List(items) => items
            .into_iter()
            .map(load_embedded::<R>)
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        other => Err(Error::transform(format!(
            "expected a list of {} mappings, found {}",
            short_type_name::<R>(),
            other.kind()
        ))),
    }
}

impl FieldSpec {
    /// A field holding one embedded `R`.
    pub fn record<R: Record>() -> Self {
        FieldSpec::new()
            .with_kind(FieldKind::Record(short_type_name::<R>()))
            .pre_dump(dump_embedded::<R>)
            .post_load(load_embedded::<R>)
    }

    /// A field holding an ordered list of embedded `R`. An empty list is a
    /// value like any other and is dumped as `[]`.
    pub fn record_list<R: Record>() -> Self {
        FieldSpec::new()
            .with_kind(FieldKind::RecordList(short_type_name::<R>()))
            .pre_dump(dump_embedded_list::<R>)
            .post_load(load_embedded_list::<R>)
    }
}
