//! Reusable field validators.
//!
//! A validator inspects one field's slot and reports an [`Outcome`]. Any
//! `Fn(&Slot) -> Outcome + Send + Sync` closure is a validator; the builders
//! here cover the common cases:
//!
//! - [`not_missing`]: the field must be supplied (or defaulted)
//! - [`is_type`]: the value's runtime kind must be one of a set
//! - [`one_of`]: the value must equal one of a set of choices
//! - [`is_eq`], [`is_gte`], [`is_gt`], [`is_lte`], [`is_lt`]: comparisons
//!   against a bound fixed when the validator is built
//!
//! Validators see a single field only; cross-field rules are not supported.

use std::cmp::Ordering;

use crate::missing::Slot;
use crate::value::{Value, ValueKind};

/// Result of running one validator against one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub valid: bool,
    pub reason: Option<String>,
}

impl Outcome {
    pub fn pass() -> Self {
        Self { valid: true, reason: None }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    /// Invalid, but contributes no reason to the error report.
    pub fn fail_silently() -> Self {
        Self {
            valid: false,
            reason: None,
        }
    }
}

/// A predicate over one field's slot.
pub trait Validate: Send + Sync {
    fn validate(&self, value: &Slot) -> Outcome;
}

impl<F> Validate for F
where
    F: Fn(&Slot) -> Outcome + Send + Sync,
{
    fn validate(&self, value: &Slot) -> Outcome {
        self(value)
    }
}

/// See [`not_missing`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NotMissing;

impl Validate for NotMissing {
    fn validate(&self, value: &Slot) -> Outcome {
        if value.is_missing() {
            Outcome::fail("value is missing")
        } else {
            Outcome::pass()
        }
    }
}

/// The field must hold a value after defaults are applied.
pub fn not_missing() -> NotMissing {
    NotMissing
}

/// See [`is_type`].
#[derive(Debug, Clone)]
pub struct IsType {
    allowed: Vec<ValueKind>,
}

impl Validate for IsType {
    fn validate(&self, value: &Slot) -> Outcome {
        let matches = value
            .value()
            .is_some_and(|v| self.allowed.contains(&v.kind()));
        if matches {
            return Outcome::pass();
        }
        let names: Vec<&str> = self.allowed.iter().map(ValueKind::name).collect();
        Outcome::fail(format!(
            "value must be one of these types: [{}], received {} instead",
            names.join(", "),
            value.kind_name()
        ))
    }
}

/// The value's kind must be one of `allowed`. A missing slot never matches.
pub fn is_type(allowed: &[ValueKind]) -> IsType {
    IsType {
        allowed: allowed.to_vec(),
    }
}

/// See [`one_of`].
#[derive(Debug, Clone)]
pub struct OneOf {
    choices: Vec<Value>,
}

impl Validate for OneOf {
    fn validate(&self, value: &Slot) -> Outcome {
        if value.value().is_some_and(|v| self.choices.contains(v)) {
            Outcome::pass()
        } else {
            Outcome::fail(format!(
                "value must be one of the following: {}",
                Value::List(self.choices.clone())
            ))
        }
    }
}

/// The value must equal one of `choices`.
pub fn one_of<I, V>(choices: I) -> OneOf
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    OneOf {
        choices: choices.into_iter().map(Into::into).collect(),
    }
}

/// Comparison operator used by [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gte,
    Gt,
    Lte,
    Lt,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Gte => ">=",
            CompareOp::Gt => ">",
            CompareOp::Lte => "<=",
            CompareOp::Lt => "<",
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering.is_eq(),
            CompareOp::Gte => ordering.is_ge(),
            CompareOp::Gt => ordering.is_gt(),
            CompareOp::Lte => ordering.is_le(),
            CompareOp::Lt => ordering.is_lt(),
        }
    }
}

/// Compares the field value (left) against a fixed bound (right).
#[derive(Debug, Clone)]
pub struct Comparison {
    op: CompareOp,
    bound: Value,
}

impl Validate for Comparison {
    fn validate(&self, value: &Slot) -> Outcome {
        let valid = value
            .value()
            .and_then(|v| v.partial_cmp(&self.bound))
            .is_some_and(|ordering| self.op.accepts(ordering));
        if valid {
            Outcome::pass()
        } else {
            Outcome::fail(format!(
                "{} {} {} is not true",
                value,
                self.op.symbol(),
                self.bound
            ))
        }
    }
}

fn compare(op: CompareOp, bound: impl Into<Value>) -> Comparison {
    Comparison {
        op,
        bound: bound.into(),
    }
}

pub fn is_eq(bound: impl Into<Value>) -> Comparison {
    compare(CompareOp::Eq, bound)
}

pub fn is_gte(bound: impl Into<Value>) -> Comparison {
    compare(CompareOp::Gte, bound)
}

pub fn is_gt(bound: impl Into<Value>) -> Comparison {
    compare(CompareOp::Gt, bound)
}

pub fn is_lte(bound: impl Into<Value>) -> Comparison {
    compare(CompareOp::Lte, bound)
}

pub fn is_lt(bound: impl Into<Value>) -> Comparison {
    compare(CompareOp::Lt, bound)
}
