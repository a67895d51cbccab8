//! Field declarations: validators, defaults, and load/dump hooks.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::missing::Slot;
use crate::value::Value;
use crate::verify::Validate;

/// Transform applied to a present value right before it is encoded.
pub type PreDump = dyn Fn(&Value) -> Result<Value> + Send + Sync;

/// Transform applied to a raw decoded value right after decoding.
pub type PostLoad = dyn Fn(Value) -> Result<Value> + Send + Sync;

/// What a field holds, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any value, passed through unchanged unless hooks are set.
    Plain,
    /// One embedded record of the named type.
    Record(&'static str),
    /// A list of embedded records of the named type.
    RecordList(&'static str),
}

/// The declaration of one record field: its validators, the value it takes
/// when absent, and its dump/load transforms.
///
/// A spec is built once when its record type registers its schema and is
/// shared read-only by every instance afterwards.
#[derive(Clone)]
pub struct FieldSpec {
    kind: FieldKind,
    validators: Vec<Arc<dyn Validate>>,
    if_missing: Slot,
    pre_dump: Option<Arc<PreDump>>,
    post_load: Option<Arc<PostLoad>>,
}

impl FieldSpec {
    /// A field that accepts anything and passes it through unchanged.
    pub fn new() -> Self {
        Self {
            kind: FieldKind::Plain,
            validators: Vec::new(),
            if_missing: Slot::Missing,
            pre_dump: None,
            post_load: None,
        }
    }

    pub(crate) fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Appends a validator. Validators run in the order they are added.
    pub fn check(mut self, validator: impl Validate + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Value assigned when the field is absent at construction time.
    pub fn if_missing(mut self, value: impl Into<Value>) -> Self {
        self.if_missing = Slot::Present(value.into());
        self
    }

    pub fn pre_dump<F>(mut self, transform: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.pre_dump = Some(Arc::new(transform));
        self
    }

    pub fn post_load<F>(mut self, transform: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.post_load = Some(Arc::new(transform));
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// The slot used when construction input omits this field.
    pub fn default_value(&self) -> &Slot {
        &self.if_missing
    }

    /// Runs every validator against `value`, in declaration order.
    ///
    /// Returns the reasons reported by each failing validator, in the same
    /// order. A failing validator without a reason makes the field invalid
    /// but adds nothing to the list.
    pub fn is_valid(&self, value: &Slot) -> std::result::Result<(), Vec<String>> {
        let mut valid = true;
        let mut reasons = Vec::new();
        for validator in &self.validators {
            let outcome = validator.validate(value);
            if !outcome.valid {
                valid = false;
                reasons.extend(outcome.reason);
            }
        }
        if valid { Ok(()) } else { Err(reasons) }
    }

    pub fn apply_pre_dump(&self, value: &Value) -> Result<Value> {
        match &self.pre_dump {
            Some(transform) => transform(value),
            None => Ok(value.clone()),
        }
    }

    pub fn apply_post_load(&self, raw: Value) -> Result<Value> {
        match &self.post_load {
            Some(transform) => transform(raw),
            None => Ok(raw),
        }
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldKind::Plain => f.write_str("Field"),
            FieldKind::Record(name) => write!(f, "RecordField({name})"),
            FieldKind::RecordList(name) => write!(f, "RecordListField({name})"),
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("kind", &self.kind)
            .field("validators", &self.validators.len())
            .field("if_missing", &self.if_missing)
            .field("pre_dump", &self.pre_dump.is_some())
            .field("post_load", &self.post_load.is_some())
            .finish()
    }
}
