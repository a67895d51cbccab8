mod common;

use common::{Empty, ModelV1, ModelV2, Person, Widget};
use lcd_model::{FieldKind, FieldSpec, Record, RecordSchema, mapping, record, verify};
use pretty_assertions::assert_eq;

// ── Registration ─────────────────────────────────────────────────

#[test]
fn schema_collects_declared_fields_in_order() {
    let names: Vec<_> = Person::schema().field_names().collect();
    assert_eq!(names, vec!["first_name", "last_name", "dob"]);
}

#[test]
fn schema_is_built_once() {
    assert!(std::ptr::eq(Person::schema(), Person::schema()));
}

#[test]
fn schema_is_named_after_the_type() {
    assert_eq!(Person::schema().name(), "Person");
    assert_eq!(Widget::schema().name(), "Widget");
}

#[test]
fn schema_exposes_field_specs() {
    let schema = Widget::schema();
    assert_eq!(schema.len(), 3);
    assert_eq!(schema.field("text").map(FieldSpec::kind), Some(FieldKind::Record("Text")));
    assert_eq!(
        schema.field("image").map(FieldSpec::kind),
        Some(FieldKind::RecordList("Image"))
    );
    assert_eq!(schema.field("debug").map(FieldSpec::kind), Some(FieldKind::Plain));
    assert!(schema.field("nope").is_none());
}

#[test]
fn empty_record_has_empty_registry() {
    assert!(Empty::schema().is_empty());
    assert_eq!(Empty::schema().len(), 0);
}

#[test]
fn unknown_key_policy_is_per_type() {
    assert!(!ModelV1::schema().ignores_unknown_keys());
    assert!(ModelV2::schema().ignores_unknown_keys());
}

#[test]
fn unknown_key_flag_may_follow_other_attributes() {
    record! {
        /// Accepts documents from newer producers.
        #[allow(dead_code)]
        #[record(ignore_unknown_keys)]
        /// Only the name is kept.
        struct Tolerant {
            name: FieldSpec::new(),
        }
    }
    assert!(Tolerant::schema().ignores_unknown_keys());
    let tolerant = Tolerant::new(mapping! { "name" => "john", "mood" => "ok" }).unwrap();
    assert_eq!(tolerant.dump().unwrap(), r#"{"name":"john"}"#);
}

#[test]
fn field_specs_never_leak_into_instances() {
    let person = Person::default();
    assert!(person.first_name.is_missing());
    assert!(person.dob.is_missing());
}

// ── Builder ──────────────────────────────────────────────────────

#[test]
fn builder_defaults_to_rejecting_unknown_keys() {
    let schema = RecordSchema::builder("Thing").field("a", FieldSpec::new()).build();
    assert!(!schema.ignores_unknown_keys());
    assert!(schema.contains("a"));
    assert!(!schema.contains("b"));
}

#[test]
fn redeclaring_a_field_replaces_it_in_place() {
    let schema = RecordSchema::builder("Thing")
        .field("a", FieldSpec::new())
        .field("b", FieldSpec::new())
        .field("a", FieldSpec::new().check(verify::not_missing()))
        .build();
    let names: Vec<_> = schema.field_names().collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(schema.field("a").map(FieldSpec::validator_count), Some(1));
}

#[test]
fn fields_iterates_name_and_spec() {
    let schema = RecordSchema::builder("Thing")
        .field("x", FieldSpec::new())
        .field("y", FieldSpec::new().check(verify::not_missing()))
        .build();
    let counts: Vec<_> = schema
        .fields()
        .map(|(name, spec)| (name, spec.validator_count()))
        .collect();
    assert_eq!(counts, vec![("x", 0), ("y", 1)]);
}
