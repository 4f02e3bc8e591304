use std::io::{Read, Write};

use log::trace;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::formats::Document;

/// Fails on non finite coordinates, json has no number for them.
pub fn to_string(data: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string(data)?)
}

pub fn to_string_pretty(data: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn to_writer(writer: impl Write, data: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, data)?;
    } else {
        serde_json::to_writer(writer, data)?;
    }
    Ok(())
}

pub fn from_str<T: DeserializeOwned>(string: &str) -> Result<T> {
    trace!("Decoding {} bytes of json", string.len());
    Ok(serde_json::from_str(string)?)
}

pub fn from_reader<T: DeserializeOwned>(reader: impl Read) -> Result<T> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read either a single value or a list of values
pub fn read_document(mut reader: impl Read) -> Result<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    trace!("Decoding {} bytes of json", bytes.len());

    let first = bytes.iter().find(|byte| !byte.is_ascii_whitespace());
    if first == Some(&b'[') {
        Ok(Document::Many(serde_json::from_slice(&bytes)?))
    } else {
        Ok(Document::One(serde_json::from_slice(&bytes)?))
    }
}
