//! Errors returned by the accessors and the format codecs

use crate::value::Tag;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A typed accessor was used on the other variant
    #[error("Expected a {expected} value, got a {found} one")]
    WrongVariant { expected: Tag, found: Tag },

    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("Json: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "message-pack")]
    #[error("MessagePack encoding: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[cfg(feature = "message-pack")]
    #[error("MessagePack decoding: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
