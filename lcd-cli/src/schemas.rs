//! Record types the checker knows how to validate.

use chrono::{NaiveDate, NaiveDateTime};
use lcd_model::verify::{self, Outcome, Validate};
use lcd_model::{Error, FieldSpec, Result, Slot, Value, ValueKind, record};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn dump_date(value: &Value) -> Result<Value> {
    match value {
        Value::Date(date) => Ok(Value::from(date.format(DATE_FORMAT).to_string())),
        Value::DateTime(dt) => Ok(Value::from(dt.format(DATE_FORMAT).to_string())),
        other => Err(Error::transform(format!("expected a date, found {}", other.kind()))),
    }
}

/// Accepts `YYYY-MM-DD`, or a full timestamp whose date part is kept.
fn load_date(raw: Value) -> Result<Value> {
    let Some(text) = raw.as_str() else {
        return Err(Error::transform(format!(
            "expected a date string, found {}",
            raw.kind()
        )));
    };
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Ok(Value::Date(date));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| Value::Date(dt.date()))
        .map_err(|e| Error::transform(format!("invalid date {text:?}: {e}")))
}

/// Runs `check` only when the field holds a value; missing passes.
fn optional<V: Validate + 'static>(check: V) -> impl Validate + 'static {
    move |value: &Slot| {
        if value.is_missing() {
            Outcome::pass()
        } else {
            check.validate(value)
        }
    }
}

fn text() -> FieldSpec {
    FieldSpec::new().check(optional(verify::is_type(&[ValueKind::Str])))
}

fn offset() -> FieldSpec {
    FieldSpec::new()
        .check(optional(verify::is_type(&[ValueKind::Int])))
        .check(optional(verify::is_gte(0)))
}

fn alignment() -> FieldSpec {
    FieldSpec::new().check(optional(verify::one_of(["left", "center", "right"])))
}

record! {
    /// A person with a required first name and a birth date.
    pub struct Person {
        first_name: text().check(verify::not_missing()),
        last_name: text(),
        dob: FieldSpec::new()
            .check(optional(verify::is_type(&[ValueKind::Date, ValueKind::DateTime])))
            .pre_dump(dump_date)
            .post_load(load_date),
    }
}

record! {
    #[allow(non_snake_case)]
    pub struct Text {
        data: text().check(verify::not_missing()),
        size: FieldSpec::new().check(optional(verify::is_gt(0))),
        style: FieldSpec::new(),
        name: text(),
        hOffset: offset(),
        vOffset: offset(),
        alignment: alignment(),
        onMouseUp: text(),
    }
}

record! {
    #[allow(non_snake_case)]
    pub struct Image {
        src: text().check(verify::not_missing()),
        name: text().check(verify::not_missing()),
        hOffset: offset(),
        vOffset: offset(),
        alignment: alignment(),
    }
}

record! {
    /// A text label plus any number of images.
    pub struct Widget {
        text: FieldSpec::record::<Text>(),
        image: FieldSpec::record_list::<Image>(),
        debug: FieldSpec::new().check(optional(verify::one_of(["on", "off"]))),
    }
}
