//! The record contract: validated construction, `load`, and `dump`.

use std::any::{Any, TypeId};
use std::fmt;

use tracing::{debug, trace};

use crate::codec::{Codec, JsonCodec, StructCodec};
use crate::error::{Error, FieldErrors, InvalidRecord, Result};
use crate::missing::Slot;
use crate::schema::RecordSchema;
use crate::value::{Mapping, Value};

/// A record type: a struct with one [`Slot`] per declared field.
///
/// Implementors supply the schema and name-based slot access; usually via
/// the [`record!`](crate::record) macro. Everything else is provided.
///
/// Construction is all-or-nothing: an instance exists only if every field
/// passed its validators. Assigning to a slot directly afterwards bypasses
/// validation.
pub trait Record: fmt::Debug + Clone + Default + Send + Sync + 'static {
    /// The type's field registry. Must return the same instance every call.
    fn schema() -> &'static RecordSchema;

    fn slot(&self, name: &str) -> Option<&Slot>;

    fn slot_mut(&mut self, name: &str) -> Option<&mut Slot>;

    /// A present field's value by name. `None` for missing or undeclared
    /// fields.
    fn get(&self, name: &str) -> Option<&Value> {
        self.slot(name).and_then(Slot::value)
    }

    /// Validates `kwargs` against the schema and builds an instance.
    ///
    /// Undeclared keys are rejected up front unless the type ignores them.
    /// Otherwise every declared field is resolved (supplied value, else its
    /// default) and validated; all failures are collected before returning.
    fn new(kwargs: Mapping) -> Result<Self> {
        let schema = Self::schema();

        let unknown: Vec<String> = kwargs
            .keys()
            .filter(|key| !schema.contains(key.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() && !schema.ignores_unknown_keys() {
            debug!(record = schema.name(), keys = ?unknown, "rejecting unexpected keys");
            return Err(InvalidRecord::UnexpectedKeys {
                record: schema.name(),
                keys: unknown,
                input: kwargs,
            }
            .into());
        }

        let mut errors = FieldErrors::new();
        let mut resolved = Vec::with_capacity(schema.len());
        for (name, field) in schema.fields() {
            let value = match kwargs.get(name) {
                Some(value) => Slot::Present(value.clone()),
                None => field.default_value().clone(),
            };
            match field.is_valid(&value) {
                Ok(()) => resolved.push((name, value)),
                Err(reasons) => {
                    errors.insert(name, reasons);
                }
            }
        }
        if !errors.is_empty() {
            debug!(record = schema.name(), failing = errors.len(), "record failed validation");
            return Err(InvalidRecord::FieldValidation {
                record: schema.name(),
                errors,
                input: kwargs,
            }
            .into());
        }

        let mut record = Self::default();
        for (name, value) in resolved {
            let slot = record.slot_mut(name).ok_or_else(|| Error::SlotMismatch {
                record: schema.name(),
                field: name.to_owned(),
            })?;
            *slot = value;
        }
        Ok(record)
    }

    /// Decodes a JSON document and builds an instance from it.
    fn load(raw: &str) -> Result<Self> {
        Self::load_with(raw.to_owned(), &JsonCodec::new())
    }

    /// Decodes `raw` with `codec`, runs `post_load` on each declared field
    /// present in the result, then constructs. Absent fields are left for
    /// their defaults; `post_load` never sees them.
    fn load_with<C: Codec>(raw: C::Raw, codec: &C) -> Result<Self> {
        let mut kwargs = codec.decode(raw)?;
        for (name, field) in Self::schema().fields() {
            if let Some(raw_value) = kwargs.remove(name) {
                let value = field.apply_post_load(raw_value)?;
                kwargs.insert(name.to_owned(), value);
            }
        }
        let record = Self::new(kwargs)?;
        trace!(record = Self::schema().name(), "loaded record");
        Ok(record)
    }

    /// Builds an instance from an already-decoded mapping.
    fn from_mapping(mapping: Mapping) -> Result<Self> {
        Self::load_with(mapping, &StructCodec)
    }

    /// Encodes the record as a JSON document.
    fn dump(&self) -> Result<String> {
        self.dump_with(&JsonCodec::new())
    }

    fn dump_with<C: Codec>(&self, codec: &C) -> Result<C::Raw> {
        let mapping = self.to_mapping()?;
        trace!(record = Self::schema().name(), fields = mapping.len(), "dumping record");
        codec.encode(mapping)
    }

    /// Runs `pre_dump` over every present field. Missing fields are left
    /// out of the result entirely.
    fn to_mapping(&self) -> Result<Mapping> {
        let schema = Self::schema();
        let mut mapping = Mapping::new();
        for (name, field) in schema.fields() {
            let slot = self.slot(name).ok_or_else(|| Error::SlotMismatch {
                record: schema.name(),
                field: name.to_owned(),
            })?;
            if let Slot::Present(value) = slot {
                mapping.insert(name.to_owned(), field.apply_pre_dump(value)?);
            }
        }
        Ok(mapping)
    }
}

/// Object-safe view of a record, used to embed records inside [`Value`]s.
///
/// Implemented for every [`Record`].
///
/// [`Value`]: crate::Value
pub trait AnyRecord: fmt::Debug + Send + Sync {
    fn record_name(&self) -> &'static str;

    fn record_type_id(&self) -> TypeId;

    fn as_any(&self) -> &dyn Any;

    /// Dumps through the structural codec.
    fn dump_struct(&self) -> Result<Mapping>;

    fn clone_record(&self) -> Box<dyn AnyRecord>;
}

impl<R: Record> AnyRecord for R {
    fn record_name(&self) -> &'static str {
        R::schema().name()
    }

    fn record_type_id(&self) -> TypeId {
        TypeId::of::<R>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dump_struct(&self) -> Result<Mapping> {
        self.dump_with(&StructCodec)
    }

    fn clone_record(&self) -> Box<dyn AnyRecord> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn AnyRecord> {
    fn clone(&self) -> Self {
        (**self).clone_record()
    }
}
