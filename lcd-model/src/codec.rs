//! Codecs turn a record's [`Mapping`] into its serialized form and back.
//!
//! - [`JsonCodec`]: the default textual codec, used by `load`/`dump`
//! - [`StructCodec`]: identity over mappings, used between nested records so
//!   only the outermost call touches text

use crate::error::{CodecError, Result};
use crate::value::Mapping;

/// A pluggable encode/decode pair.
pub trait Codec {
    /// The serialized form.
    type Raw;

    fn encode(&self, mapping: Mapping) -> Result<Self::Raw>;

    /// Decoding failures are surfaced as [`Error::Codec`](crate::Error::Codec)
    /// carrying the underlying error.
    fn decode(&self, raw: Self::Raw) -> Result<Mapping>;
}

/// JSON text via `serde_json`. The top level must be an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Compact output.
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented output.
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    pub const fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Codec for JsonCodec {
    type Raw = String;

    fn encode(&self, mapping: Mapping) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&mapping)
        } else {
            serde_json::to_string(&mapping)
        };
        Ok(encoded.map_err(CodecError::from)?)
    }

    fn decode(&self, raw: String) -> Result<Mapping> {
        Ok(serde_json::from_str(&raw).map_err(CodecError::from)?)
    }
}

/// Passes mappings through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructCodec;

impl Codec for StructCodec {
    type Raw = Mapping;

    fn encode(&self, mapping: Mapping) -> Result<Mapping> {
        Ok(mapping)
    }

    fn decode(&self, raw: Mapping) -> Result<Mapping> {
        Ok(raw)
    }
}
