//! MessagePack encoding
//!
//! Structs are written as maps with their field names, so the encoded record has the same
//! `type` and `value` keys the json encoding has.
use std::io::{Read, Write};

use log::trace;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::formats::Document;

pub fn to_vec(data: &impl Serialize) -> Result<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(data)?)
}

pub fn to_writer(mut writer: impl Write, data: &impl Serialize) -> Result<()> {
    rmp_serde::encode::write_named(&mut writer, data)?;
    Ok(())
}

pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    trace!("Decoding {} bytes of message pack", bytes.len());
    Ok(rmp_serde::from_slice(bytes)?)
}

pub fn from_reader<T: DeserializeOwned>(reader: impl Read) -> Result<T> {
    Ok(rmp_serde::from_read(reader)?)
}

/// Read either a single value or a list of values
pub fn read_document(mut reader: impl Read) -> Result<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    trace!("Decoding {} bytes of message pack", bytes.len());

    // fixarray, array 16 and array 32 markers
    if matches!(bytes.first(), Some(0x90..=0x9f | 0xdc | 0xdd)) {
        Ok(Document::Many(rmp_serde::from_slice(&bytes)?))
    } else {
        Ok(Document::One(rmp_serde::from_slice(&bytes)?))
    }
}
