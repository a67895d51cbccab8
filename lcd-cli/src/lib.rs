//! Checks documents against lcd record types.
//!
//! The binary in `main.rs` is a thin shell over [`check_document`] and
//! [`describe_fields`]; both are exposed here so they can be tested without
//! spawning a process.

pub mod schemas;

use std::fmt;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use lcd_model::{Error, InvalidRecord, JsonCodec, Record, RecordSchema};
use tracing::{debug, warn};

/// Record types selectable with `--schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaName {
    Person,
    Widget,
}

impl SchemaName {
    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            SchemaName::Person => schemas::Person::schema(),
            SchemaName::Widget => schemas::Widget::schema(),
        }
    }
}

/// Outcome of checking one document.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckReport {
    /// The document loaded; holds its canonical dump.
    Valid(String),
    /// The document decoded but failed the record's schema.
    Invalid(InvalidRecord),
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        matches!(self, CheckReport::Valid(_))
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckReport::Valid(dumped) => f.write_str(dumped),
            CheckReport::Invalid(invalid) => write!(f, "{invalid}"),
        }
    }
}

fn check_as<R: Record>(raw: &str, codec: &JsonCodec) -> lcd_model::Result<CheckReport> {
    match R::load(raw) {
        Ok(record) => record.dump_with(codec).map(CheckReport::Valid),
        Err(Error::Invalid(invalid)) => Ok(CheckReport::Invalid(invalid)),
        Err(other) => Err(other),
    }
}

/// Loads `raw` as the selected record type and re-dumps it.
///
/// Schema violations are reported in the returned [`CheckReport`]; decode
/// and transform failures are returned as errors.
pub fn check_document(schema: SchemaName, raw: &str, pretty: bool) -> lcd_model::Result<CheckReport> {
    let codec = if pretty { JsonCodec::pretty() } else { JsonCodec::new() };
    let report = match schema {
        SchemaName::Person => check_as::<schemas::Person>(raw, &codec)?,
        SchemaName::Widget => check_as::<schemas::Widget>(raw, &codec)?,
    };
    match &report {
        CheckReport::Valid(_) => debug!(record = schema.schema().name(), "document is valid"),
        CheckReport::Invalid(invalid) => {
            warn!(record = invalid.record(), "document failed validation")
        }
    }
    Ok(report)
}

/// One line per declared field, in registry order.
pub fn describe_fields(schema: SchemaName) -> Vec<String> {
    schema
        .schema()
        .fields()
        .map(|(name, spec)| match spec.validator_count() {
            0 => format!("{name}: {spec}"),
            1 => format!("{name}: {spec} (1 check)"),
            n => format!("{name}: {spec} ({n} checks)"),
        })
        .collect()
}

/// Reads a document from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read document from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document from {}", path.display()))
}
