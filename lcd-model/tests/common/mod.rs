//! Shared record fixtures for lcd-model tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use lcd_model::{Error, FieldSpec, Result, Value, ValueKind, record, verify};

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Renders a date as `YYYY-MM-DD`.
pub fn dump_date(value: &Value) -> Result<Value> {
    match value {
        Value::Date(date) => Ok(Value::from(date.format("%Y-%m-%d").to_string())),
        Value::DateTime(dt) => Ok(Value::from(dt.format("%Y-%m-%d").to_string())),
        other => Err(Error::transform(format!("expected a date, found {}", other.kind()))),
    }
}

/// Parses a `YYYY-MM-DD` string into a date.
pub fn load_date(raw: Value) -> Result<Value> {
    let text = raw
        .as_str()
        .ok_or_else(|| Error::transform(format!("expected a date string, found {}", raw.kind())))?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Value::Date)
        .map_err(|e| Error::transform(format!("bad date {text:?}: {e}")))
}

pub fn date_field() -> FieldSpec {
    FieldSpec::new()
        .check(verify::is_type(&[ValueKind::Date, ValueKind::DateTime]))
        .pre_dump(dump_date)
        .post_load(load_date)
}

record! {
    /// Plain fields only.
    pub struct Contact {
        first_name: FieldSpec::new(),
        last_name: FieldSpec::new(),
        dob: FieldSpec::new().pre_dump(dump_date).post_load(load_date),
    }
}

record! {
    /// A person with a required name and a typed birth date.
    pub struct Person {
        first_name: FieldSpec::new(),
        last_name: FieldSpec::new(),
        dob: date_field(),
    }
}

record! {
    /// Like [`Person`], but the first name is required and `dob` defaults.
    pub struct StrictPerson {
        first_name: FieldSpec::new().check(verify::not_missing()),
        last_name: FieldSpec::new(),
        dob: date_field().if_missing(ymd(2000, 1, 1)),
    }
}

record! {
    #[allow(non_snake_case)]
    pub struct Text {
        data: FieldSpec::new(),
        size: FieldSpec::new(),
        style: FieldSpec::new(),
        name: FieldSpec::new(),
        hOffset: FieldSpec::new(),
        vOffset: FieldSpec::new(),
        alignment: FieldSpec::new(),
        onMouseUp: FieldSpec::new(),
    }
}

record! {
    #[allow(non_snake_case)]
    pub struct Image {
        src: FieldSpec::new(),
        name: FieldSpec::new().check(verify::not_missing()),
        hOffset: FieldSpec::new(),
        vOffset: FieldSpec::new(),
        alignment: FieldSpec::new(),
    }
}

record! {
    pub struct Widget {
        text: FieldSpec::record::<Text>(),
        image: FieldSpec::record_list::<Image>(),
        debug: FieldSpec::new(),
    }
}

record! {
    pub struct ModelV1 {
        name: FieldSpec::new().check(verify::not_missing()),
        temp: FieldSpec::new(),
    }
}

record! {
    #[record(ignore_unknown_keys)]
    pub struct ModelV2 {
        name: FieldSpec::new().check(verify::not_missing()),
    }
}

record! {
    pub struct Empty {}
}

pub const WIDGET_JSON: &str = r#"
{
    "debug": "on",
    "image": [{
        "src": "Images/Sun.png",
        "name": "sun1",
        "hOffset": 250,
        "vOffset": 250,
        "alignment": "center"
    },{
        "src": "Images/Moon.png",
        "name": "moon",
        "hOffset": 250,
        "vOffset": 250,
        "alignment": "center"
    }],
    "text": {
        "data": "Click Here",
        "size": 36,
        "style": "bold",
        "name": "text1",
        "hOffset": 250,
        "vOffset": 100,
        "alignment": "center",
        "onMouseUp": "sun1.opacity = (sun1.opacity / 100) * 90;"
    }
}
"#;
