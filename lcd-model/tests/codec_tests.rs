mod common;

use common::{Contact, Person, ymd};
use lcd_model::{
    Codec, CodecError, Error, JsonCodec, Mapping, Record, StructCodec, Value, mapping,
};
use pretty_assertions::assert_eq;

/// Encodes to pipe-separated `key=value` pairs. Strings only.
struct PipeCodec;

impl Codec for PipeCodec {
    type Raw = String;

    fn encode(&self, mapping: Mapping) -> lcd_model::Result<String> {
        let pairs: Vec<String> = mapping
            .iter()
            .map(|(k, v)| format!("{k}={}", v.as_str().unwrap_or_default()))
            .collect();
        Ok(pairs.join("|"))
    }

    fn decode(&self, raw: String) -> lcd_model::Result<Mapping> {
        raw.split('|')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                pair.split_once('=')
                    .map(|(k, v)| (k.to_owned(), Value::from(v)))
                    .ok_or_else(|| Error::from(CodecError::Custom(format!("bad pair {pair:?}"))))
            })
            .collect()
    }
}

// ── JsonCodec ────────────────────────────────────────────────────

#[test]
fn json_codec_is_compact_by_default() {
    let codec = JsonCodec::new();
    assert!(!codec.is_pretty());
    let encoded = codec.encode(mapping! { "a" => 1, "b" => vec![true, false] }).unwrap();
    assert_eq!(encoded, r#"{"a":1,"b":[true,false]}"#);
}

#[test]
fn json_codec_pretty_indents() {
    let encoded = JsonCodec::pretty().encode(mapping! { "a" => 1 }).unwrap();
    assert_eq!(encoded, "{\n  \"a\": 1\n}");
}

#[test]
fn json_codec_decodes_every_scalar_kind() {
    let decoded = JsonCodec::new()
        .decode(r#"{"n": null, "b": true, "i": -3, "f": 1.5, "s": "x", "l": [1], "m": {"k": 2}}"#.to_owned())
        .unwrap();
    assert_eq!(decoded["n"], Value::Null);
    assert_eq!(decoded["b"], Value::Bool(true));
    assert_eq!(decoded["i"], Value::Int(-3));
    assert_eq!(decoded["f"], Value::Float(1.5));
    assert_eq!(decoded["s"], Value::from("x"));
    assert_eq!(decoded["l"], Value::from(vec![1]));
    assert_eq!(decoded["m"], Value::Map(mapping! { "k" => 2 }));
}

#[test]
fn json_codec_wraps_native_errors() {
    let err = JsonCodec::new().decode("{".to_owned()).unwrap_err();
    match err {
        Error::Codec(CodecError::Json(inner)) => assert!(inner.is_eof()),
        other => panic!("expected a json error, got {other:?}"),
    }
}

#[test]
fn json_codec_rejects_non_finite_floats() {
    let err = JsonCodec::new().encode(mapping! { "x" => f64::NAN }).unwrap_err();
    assert!(matches!(err, Error::Codec(CodecError::Json(_))));
}

#[test]
fn json_codec_keeps_large_unsigned_integers_exact() {
    let decoded = JsonCodec::new().decode(r#"{"big": 18446744073709551615}"#.to_owned()).unwrap();
    assert_eq!(decoded["big"], Value::UInt(u64::MAX));
    assert_eq!(decoded["big"].kind().name(), "int");
    assert_eq!(decoded["big"].as_u64(), Some(u64::MAX));
}

#[test]
fn large_unsigned_integers_survive_a_record_round_trip() {
    let raw = r#"{"first_name":18446744073709551615}"#;
    let contact = Contact::load(raw).unwrap();
    assert_eq!(contact.dump().unwrap(), raw);
}

#[test]
fn floats_survive_a_record_round_trip() {
    let contact = Contact::new(mapping! { "first_name" => -915074859.2685423 }).unwrap();
    let dumped = contact.dump().unwrap();
    assert_eq!(dumped, r#"{"first_name":-915074859.2685423}"#);
    assert_eq!(Contact::load(&dumped).unwrap().dump().unwrap(), dumped);
}

// ── StructCodec ──────────────────────────────────────────────────

#[test]
fn struct_codec_is_identity() {
    let mapping = mapping! { "a" => "b" };
    assert_eq!(StructCodec.encode(mapping.clone()).unwrap(), mapping);
    assert_eq!(StructCodec.decode(mapping.clone()).unwrap(), mapping);
}

// ── Custom codecs ────────────────────────────────────────────────

#[test]
fn records_load_and_dump_through_any_codec() {
    let person = Person::load_with("dob=2011-02-01|first_name=john".to_owned(), &PipeCodec).unwrap();
    assert_eq!(person.dob.value().and_then(Value::as_date), Some(ymd(2011, 2, 1)));
    assert_eq!(person.dump_with(&PipeCodec).unwrap(), "dob=2011-02-01|first_name=john");
}

#[test]
fn custom_codec_errors_surface_unchanged() {
    let err = Person::load_with("first_name".to_owned(), &PipeCodec).unwrap_err();
    assert!(matches!(err, Error::Codec(CodecError::Custom(ref msg)) if msg.contains("first_name")));
}

#[test]
fn pretty_dump_of_a_record() {
    let contact = Contact::load(r#"{"first_name":"john"}"#).unwrap();
    assert_eq!(
        contact.dump_with(&JsonCodec::pretty()).unwrap(),
        "{\n  \"first_name\": \"john\"\n}"
    );
}
