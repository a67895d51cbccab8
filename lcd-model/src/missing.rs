//! The "field was not supplied" marker.

use std::fmt;

use crate::record::Record;
use crate::value::Value;

/// The content of one record field: either a value or the absent marker.
///
/// `Missing` is a distinct variant rather than a special value, so no
/// domain value (including [`Value::Null`] or an empty string) can ever
/// compare equal to it. Missing slots are omitted from `dump` output and
/// never reach a `pre_dump` or `post_load` hook.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Slot {
    #[default]
    Missing,
    Present(Value),
}

/// The shared absent marker.
pub const MISSING: Slot = Slot::Missing;

impl Slot {
    pub fn present(value: impl Into<Value>) -> Self {
        Slot::Present(value.into())
    }

    pub const fn is_missing(&self) -> bool {
        matches!(self, Slot::Missing)
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Slot::Present(value) => Some(value),
            Slot::Missing => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Slot::Present(value) => Some(value),
            Slot::Missing => None,
        }
    }

    /// `Missing` is always falsy; present values follow [`Value::is_truthy`].
    pub fn is_truthy(&self) -> bool {
        self.value().is_some_and(Value::is_truthy)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value().and_then(Value::as_i64)
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        self.value().and_then(Value::as_list)
    }

    pub fn as_record<R: Record>(&self) -> Option<&R> {
        self.value().and_then(Value::as_record::<R>)
    }

    /// Type name used in validation reasons; `"missing"` for the marker.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Slot::Present(value) => value.kind().name(),
            Slot::Missing => "missing",
        }
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Slot::Present(value)
    }
}

impl From<&Slot> for bool {
    fn from(slot: &Slot) -> Self {
        slot.is_truthy()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Present(value) => write!(f, "{value}"),
            Slot::Missing => f.write_str("<missing>"),
        }
    }
}
