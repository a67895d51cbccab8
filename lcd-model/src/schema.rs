//! Per-type field registries.

use tracing::debug;

use crate::field::FieldSpec;

/// The field registry of one record type.
///
/// Built once per type (see [`record!`](crate::record)) and read-only from
/// then on. Declaration order is kept for error and listing output; it has
/// no effect on validation or serialization.
#[derive(Debug)]
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<(&'static str, FieldSpec)>,
    ignore_unknown_keys: bool,
}

impl RecordSchema {
    pub fn builder(name: &'static str) -> RecordSchemaBuilder {
        RecordSchemaBuilder {
            name,
            fields: Vec::new(),
            ignore_unknown_keys: false,
        }
    }

    /// The record type's name, used in errors and logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (*name, spec))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, spec)| spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether construction drops undeclared keys instead of rejecting them.
    pub fn ignores_unknown_keys(&self) -> bool {
        self.ignore_unknown_keys
    }
}

/// Collects field declarations for a [`RecordSchema`].
#[derive(Debug)]
pub struct RecordSchemaBuilder {
    name: &'static str,
    fields: Vec<(&'static str, FieldSpec)>,
    ignore_unknown_keys: bool,
}

impl RecordSchemaBuilder {
    /// Declares a field. Redeclaring a name replaces the earlier spec but
    /// keeps its position.
    pub fn field(mut self, name: &'static str, spec: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|(declared, _)| *declared == name) {
            Some(existing) => existing.1 = spec,
            None => self.fields.push((name, spec)),
        }
        self
    }

    /// Tolerate undeclared keys at construction time, so a consumer can
    /// read documents from a producer with a newer schema.
    pub fn ignore_unknown_keys(mut self, ignore: bool) -> Self {
        self.ignore_unknown_keys = ignore;
        self
    }

    pub fn build(self) -> RecordSchema {
        debug!(
            record = self.name,
            fields = self.fields.len(),
            ignore_unknown_keys = self.ignore_unknown_keys,
            "registered record schema"
        );
        RecordSchema {
            name: self.name,
            fields: self.fields,
            ignore_unknown_keys: self.ignore_unknown_keys,
        }
    }
}
