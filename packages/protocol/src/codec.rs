//! JSON text codec.
//!
//! Decoding happens in two steps so receivers can tell "not a message at
//! all" apart from "a message we know with a bad payload". Both end up
//! dropped, but they are logged differently.

use crate::{ProtocolError, ProtocolResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Discriminants a message family accepts on the wire.
pub trait MessageKind {
    const KINDS: &'static [&'static str];

    fn kind(&self) -> &'static str;
}

pub fn encode<M: Serialize>(message: &M) -> ProtocolResult<String> {
    serde_json::to_string(message).map_err(ProtocolError::Encode)
}

pub fn decode<M>(raw: &str) -> ProtocolResult<M>
where
    M: DeserializeOwned + MessageKind,
{
    let value: Value = serde_json::from_str(raw).map_err(ProtocolError::Malformed)?;

    let kind = value
        .get("kind")
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingKind)?;

    if !M::KINDS.contains(&kind) {
        return Err(ProtocolError::UnknownKind(kind.to_string()));
    }
    let kind = kind.to_string();

    serde_json::from_value(value).map_err(|source| ProtocolError::InvalidPayload { kind, source })
}
