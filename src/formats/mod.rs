//! Codecs for the external record shape of a [`Value`]
use serde::Serialize;

use crate::value::Value;

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "message-pack")]
pub mod msgpack;

/// Either a single value or a list of them
///
/// Decoding picks the variant from the input's first token (see `read_document` in each format),
/// so a malformed value reports its own error instead of a generic untagged mismatch.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Document {
    One(Value),
    Many(Vec<Value>),
}

impl Document {
    pub fn values(&self) -> &[Value] {
        match self {
            Document::One(value) => std::slice::from_ref(value),
            Document::Many(values) => values,
        }
    }
}
